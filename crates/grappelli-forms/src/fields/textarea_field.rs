//! Free-text area field with bounded length

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::BoundedLengthValidator;

/// Required multi-line text field whose character count must fall in an
/// inclusive range.
#[derive(Debug, Clone)]
pub struct TextAreaField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	widget: Widget,
	validator: BoundedLengthValidator,
}

impl TextAreaField {
	/// Create a new TextAreaField with the given identifier and length
	/// bounds.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::fields::TextAreaField;
	/// use grappelli_forms::FormField;
	///
	/// let field = TextAreaField::new(
	///     "message",
	///     10,
	///     500,
	///     "Message must be at least 10 characters long",
	///     "Message must be less than 500 characters",
	/// );
	/// assert!(field.clean("long enough text").is_ok());
	/// assert!(field.clean("too short").is_err());
	/// ```
	pub fn new(
		name: impl Into<String>,
		min_length: usize,
		max_length: usize,
		below_min: impl Into<String>,
		above_max: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			widget: Widget::TextArea,
			validator: BoundedLengthValidator::new(min_length, max_length, below_min, above_max),
		}
	}

	/// Set the label for the field.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the help text for the field.
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
}

impl FormField for TextAreaField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		true
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: &str) -> FieldResult<String> {
		let trimmed = value.trim();
		self.validator.validate(trimmed)?;
		Ok(trimmed.to_string())
	}
}
