//! Person-name field

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::NameValidator;

/// Required text field for a person's name: at least two characters,
/// letters/spaces/apostrophes/hyphens only.
#[derive(Debug, Clone)]
pub struct NameField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	widget: Widget,
	validator: NameValidator,
}

impl NameField {
	/// Create a new NameField with the given identifier.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::fields::NameField;
	/// use grappelli_forms::FormField;
	///
	/// let field = NameField::new("full-name");
	/// assert_eq!(field.name(), "full-name");
	/// assert!(field.required());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			widget: Widget::TextInput,
			validator: NameValidator::new(),
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
		bad_charset: impl Into<String>,
	) -> Self {
		self.validator = self.validator.with_messages(too_short, bad_charset);
		self
	}
}

impl FormField for NameField {
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
	fn test_name_field_trims_before_validating() {
		// Arrange
		let field = NameField::new("full-name");

		// Act
		let cleaned = field.clean("  John Doe  ").unwrap();

		// Assert
		assert_eq!(cleaned, "John Doe");
	}

	#[rstest]
	fn test_name_field_whitespace_only_fails_length_rule() {
		// Arrange
		let field = NameField::new("full-name");

		// Act: trims to empty, so the length message applies
		let err = field.clean("   ").unwrap_err();

		// Assert
		assert_eq!(err.message(), "Name must be at least 2 characters long");
	}

	#[rstest]
	fn test_name_field_rejects_digits() {
		// Arrange
		let field = NameField::new("full-name");

		// Act
		let err = field.clean("John 3rd").unwrap_err();

		// Assert
		assert_eq!(
			err.message(),
			"Name can only contain letters, spaces, apostrophes, and hyphens"
		);
	}
}
