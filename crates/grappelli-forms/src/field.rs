//! Field trait and shared field types
//!
//! A [`FormField`] owns one field's rule: given the raw text the user
//! typed, `clean` trims it, applies the rule, and returns either the
//! cleaned value or the failure message for the field's error slot.
//! Invalid input is an expected outcome, not a fault - the error type
//! only carries the message to display.

use serde::{Deserialize, Serialize};

/// Error produced by a field rule.
///
/// This never represents a system fault: it carries the human-readable
/// message destined for the field's error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The value failed the field's rule; the payload is the slot message.
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// The message destined for the error slot.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::FieldError;
	///
	/// let err = FieldError::Validation("Please enter a valid email address".to_string());
	/// assert_eq!(err.message(), "Please enter a valid email address");
	/// ```
	pub fn message(&self) -> &str {
		match self {
			FieldError::Validation(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Display hint for rendering a field's input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	PhoneInput,
	PasswordInput,
	TextArea,
}

/// A single form field: identity, display metadata, and the rule applied
/// to its value.
///
/// Implementations validate the value with leading/trailing whitespace
/// removed and return the trimmed value on success.
pub trait FormField: Send + Sync {
	/// Field identifier (also the input element id in the host markup).
	fn name(&self) -> &str;

	/// Human-readable label, if one was set.
	fn label(&self) -> Option<&str>;

	/// Whether an empty value fails the rule.
	fn required(&self) -> bool;

	/// Help text shown below the input, if any.
	fn help_text(&self) -> Option<&str>;

	/// Display hint for the input element.
	fn widget(&self) -> &Widget;

	/// Apply the field's rule to `value`.
	///
	/// Trims leading/trailing whitespace first; on success returns the
	/// trimmed value, on failure the message for the error slot.
	fn clean(&self, value: &str) -> FieldResult<String>;
}
