//! Live form state and the blur/input/submit validation cycle
//!
//! [`Form`] is the client-side engine: it owns the registered fields,
//! each field's current text, error slot, and evaluation status, plus the
//! form-level result message. The host delivers three events:
//!
//! - `input` - the user typed; record the value and clear the stale error
//!   (no re-evaluation until the next blur or submit)
//! - `blur` - the user left the field; evaluate its rule
//! - `submit` - evaluate every field, gate on all of them passing
//!
//! Invalid input never raises an error: validity is a boolean plus a
//! rendered message. [`FormError`] is reserved for contract violations
//! (an identifier outside the registered set).

use crate::bound::FieldView;
use crate::field::FormField;
use tracing::debug;

/// Programming error raised when an operation names an unregistered
/// field identifier. User input can never trigger this.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("unknown field identifier: {0}")]
	UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Evaluation status of one field.
///
/// Untouched and Valid render identically (no error shown); the
/// distinction is only that Valid has been evaluated and passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
	/// Never evaluated, or the evaluation was discarded by later typing
	#[default]
	Untouched,
	/// Last evaluation passed
	Valid,
	/// Last evaluation failed; the error slot holds the message
	Invalid,
}

/// Form-level result slot, set by `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
	Success(String),
	Error(String),
}

impl FormMessage {
	pub fn text(&self) -> &str {
		match self {
			FormMessage::Success(text) | FormMessage::Error(text) => text,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, FormMessage::Success(_))
	}
}

#[derive(Debug, Default)]
struct FieldState {
	value: String,
	status: FieldStatus,
	error: Option<String>,
}

struct Entry {
	field: Box<dyn FormField>,
	state: FieldState,
}

/// A form bound to live page state.
///
/// Fields are visited in registration order; `submit` never
/// short-circuits, so every failing field's error slot is populated in
/// one pass.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{fields::EmailField, FieldStatus, Form};
///
/// let mut form = Form::new();
/// form.add_field(Box::new(EmailField::new("email")));
///
/// form.input("email", "user@example.com").unwrap();
/// assert_eq!(form.status("email"), Some(FieldStatus::Untouched));
///
/// assert!(form.blur("email").unwrap());
/// assert_eq!(form.status("email"), Some(FieldStatus::Valid));
/// ```
pub struct Form {
	entries: Vec<Entry>,
	message: Option<FormMessage>,
	success_text: String,
	failure_text: String,
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl Form {
	/// Create a new empty form with generic result messages.
	pub fn new() -> Self {
		Self {
			entries: vec![],
			message: None,
			success_text: "Form submitted successfully.".to_string(),
			failure_text: "Please fix the errors above and try again.".to_string(),
		}
	}

	/// Replace the form-level success/failure messages shown after submit.
	pub fn with_result_messages(
		mut self,
		success: impl Into<String>,
		failure: impl Into<String>,
	) -> Self {
		self.success_text = success.into();
		self.failure_text = failure.into();
		self
	}

	/// Register a field. Fields are evaluated in registration order.
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.entries.push(Entry {
			field,
			state: FieldState::default(),
		});
	}

	/// Record a keystroke: store the new value and unconditionally clear
	/// the field's error slot and invalid mark.
	///
	/// No re-evaluation happens here - stale errors disappear as soon as
	/// the user starts correcting, even if the new value is still
	/// invalid.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{fields::EmailField, Form};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(EmailField::new("email")));
	///
	/// form.input("email", "bad").unwrap();
	/// form.blur("email").unwrap();
	/// assert!(form.error("email").is_some());
	///
	/// // Typing clears the slot even though "bad!" is still invalid.
	/// form.input("email", "bad!").unwrap();
	/// assert!(form.error("email").is_none());
	/// ```
	pub fn input(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		let entry = self.entry_mut(name)?;
		entry.state.value = value.into();
		entry.state.error = None;
		entry.state.status = FieldStatus::Untouched;
		Ok(())
	}

	/// Unconditionally clear one field's error slot and invalid mark,
	/// leaving its value as typed.
	pub fn clear_error(&mut self, name: &str) -> FormResult<()> {
		let entry = self.entry_mut(name)?;
		entry.state.error = None;
		entry.state.status = FieldStatus::Untouched;
		Ok(())
	}

	/// Evaluate one field's rule against its current value, filling or
	/// clearing its error slot. Returns the field's validity.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{fields::EmailField, Form};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(EmailField::new("email")));
	///
	/// form.input("email", "bad-email").unwrap();
	/// assert!(!form.blur("email").unwrap());
	/// assert_eq!(form.error("email"), Some("Please enter a valid email address"));
	/// ```
	pub fn blur(&mut self, name: &str) -> FormResult<bool> {
		let entry = self.entry_mut(name)?;
		Ok(Self::evaluate(entry))
	}

	/// Evaluate every field (visiting all of them so each error slot is
	/// populated) and gate the submission on all passing.
	///
	/// On success the form is cleared: values emptied, statuses reset,
	/// and the success message set. On failure the entered values stay in
	/// place for correction and the aggregate error message is set.
	pub fn submit(&mut self) -> bool {
		let mut all_valid = true;
		for entry in &mut self.entries {
			if !Self::evaluate(entry) {
				all_valid = false;
			}
		}

		if all_valid {
			for entry in &mut self.entries {
				entry.state = FieldState::default();
			}
			self.message = Some(FormMessage::Success(self.success_text.clone()));
			debug!("form submitted");
		} else {
			self.message = Some(FormMessage::Error(self.failure_text.clone()));
			debug!("form submission rejected by validation");
		}
		all_valid
	}

	/// Current text of one field, as typed.
	pub fn value(&self, name: &str) -> Option<&str> {
		self.entry(name).map(|e| e.state.value.as_str())
	}

	/// Current error-slot message of one field, if any.
	pub fn error(&self, name: &str) -> Option<&str> {
		self.entry(name).and_then(|e| e.state.error.as_deref())
	}

	/// Current evaluation status of one field.
	pub fn status(&self, name: &str) -> Option<FieldStatus> {
		self.entry(name).map(|e| e.state.status)
	}

	/// Form-level result slot, set by the last submit.
	pub fn message(&self) -> Option<&FormMessage> {
		self.message.as_ref()
	}

	/// Read-only view of one field for rendering.
	pub fn field(&self, name: &str) -> Option<FieldView<'_>> {
		self.entry(name).map(Self::view)
	}

	/// Read-only views of every field, in registration order.
	pub fn fields(&self) -> Vec<FieldView<'_>> {
		self.entries.iter().map(Self::view).collect()
	}

	pub fn field_count(&self) -> usize {
		self.entries.len()
	}

	fn view(entry: &Entry) -> FieldView<'_> {
		FieldView::new(
			entry.field.as_ref(),
			&entry.state.value,
			entry.state.error.as_deref(),
			entry.state.status,
		)
	}

	fn evaluate(entry: &mut Entry) -> bool {
		match entry.field.clean(&entry.state.value) {
			Ok(_) => {
				entry.state.error = None;
				entry.state.status = FieldStatus::Valid;
				true
			}
			Err(err) => {
				debug!(field = entry.field.name(), message = err.message(), "field invalid");
				entry.state.error = Some(err.message().to_string());
				entry.state.status = FieldStatus::Invalid;
				false
			}
		}
	}

	fn entry(&self, name: &str) -> Option<&Entry> {
		self.entries.iter().find(|e| e.field.name() == name)
	}

	fn entry_mut(&mut self, name: &str) -> FormResult<&mut Entry> {
		self.entries
			.iter_mut()
			.find(|e| e.field.name() == name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))
	}
}
