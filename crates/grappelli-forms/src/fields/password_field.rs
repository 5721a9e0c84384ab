//! Password field

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::PasswordComplexityValidator;

/// Required password field: at least eight characters with lowercase,
/// uppercase, and a digit all present.
///
/// The field rule is independent of the strength meter - a password can
/// pass this rule while the meter still reads below "Very Strong".
#[derive(Debug, Clone)]
pub struct PasswordField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	widget: Widget,
	validator: PasswordComplexityValidator,
}

impl PasswordField {
	/// Create a new PasswordField with the given identifier.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::fields::PasswordField;
	/// use grappelli_forms::FormField;
	///
	/// let field = PasswordField::new("password");
	/// assert!(field.clean("Passw0rd").is_ok());
	/// assert!(field.clean("letmein").is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			widget: Widget::PasswordInput,
			validator: PasswordComplexityValidator::new(),
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

	/// Replace the default rule messages.
	pub fn with_messages(
		mut self,
		too_short: impl Into<String>,
		missing_class: impl Into<String>,
	) -> Self {
		self.validator = self.validator.with_messages(too_short, missing_class);
		self
	}
}

impl FormField for PasswordField {
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

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Ab1defgh")]
	#[case("xY9xY9xY9")]
	fn test_password_field_valid(#[case] value: &str) {
		// Arrange
		let field = PasswordField::new("password");

		// Act & Assert
		assert!(field.clean(value).is_ok());
	}

	#[rstest]
	fn test_password_field_length_message_first() {
		// Arrange: short AND missing classes reports the length message
		let field = PasswordField::new("password");

		// Act
		let err = field.clean("ab").unwrap_err();

		// Assert
		assert_eq!(err.message(), "Password must be at least 8 characters long");
	}

	#[rstest]
	fn test_password_field_missing_class_message() {
		// Arrange
		let field = PasswordField::new("password");

		// Act
		let err = field.clean("abcdefgh").unwrap_err();

		// Assert
		assert_eq!(
			err.message(),
			"Password must contain uppercase, lowercase, and number"
		);
	}
}
