//! Email address field

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Required email field validated against the loose `user@host.tld` shape.
#[derive(Debug, Clone)]
pub struct EmailField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	widget: Widget,
	validator: EmailValidator,
}

impl EmailField {
	/// Create a new EmailField with the given identifier.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::fields::EmailField;
	/// use grappelli_forms::FormField;
	///
	/// let field = EmailField::new("email");
	/// assert!(field.clean("user@example.com").is_ok());
	/// assert!(field.clean("bad-email").is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			widget: Widget::EmailInput,
			validator: EmailValidator::new(),
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

impl FormField for EmailField {
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
