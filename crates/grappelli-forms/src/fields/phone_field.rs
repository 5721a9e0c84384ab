//! Phone number field (optional)

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::PhoneValidator;

/// Optional phone field: an empty value always passes; a non-empty value
/// must match the permissive international phone shape.
#[derive(Debug, Clone)]
pub struct PhoneField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	widget: Widget,
	validator: PhoneValidator,
}

impl PhoneField {
	/// Create a new PhoneField with the given identifier.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::fields::PhoneField;
	/// use grappelli_forms::FormField;
	///
	/// let field = PhoneField::new("phone");
	/// assert!(!field.required());
	/// assert!(field.clean("").is_ok());
	/// assert!(field.clean("123").is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			widget: Widget::PhoneInput,
			validator: PhoneValidator::new(),
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

	/// Replace the default rule message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.validator = self.validator.with_message(message);
		self
	}
}

impl FormField for PhoneField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		false
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: &str) -> FieldResult<String> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Ok(String::new());
		}
		self.validator.validate(trimmed)?;
		Ok(trimmed.to_string())
	}
}
