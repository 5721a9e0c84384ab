//! Rule primitives for the contact-form fields
//!
//! Each validator owns one predicate plus the failure message(s) shown in
//! the field's error slot. Patterns are compiled once into `LazyLock`
//! statics; the password-complexity rule is three independent character
//! scans because that is how the rule is defined (order irrelevant, each
//! class checked on its own).

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Allowed name characters: letters, spaces, apostrophes, hyphens.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z\s'-]+$").expect("NAME_REGEX: invalid regex pattern")
});

// Loose email shape: something@something.something, no whitespace and no
// second "@" in any part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// International-leaning phone shape: optional leading "+", then at least
// ten characters drawn from digits, spaces, hyphens, parentheses.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[\d\s()-]{10,}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Validates a person's name: minimum length plus a restricted character
/// set (letters, spaces, apostrophes, hyphens).
///
/// # Examples
///
/// ```
/// use grappelli_forms::validators::NameValidator;
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("Django Reinhardt").is_ok());
/// assert!(validator.validate("O'Neill-Smith").is_ok());
/// assert!(validator.validate("X").is_err());
/// assert!(validator.validate("R2-D2 unit 42").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameValidator {
	min_length: usize,
	/// Message when the name is shorter than `min_length`
	too_short: String,
	/// Message when a disallowed character is present
	bad_charset: String,
}

impl NameValidator {
	pub fn new() -> Self {
		Self {
			min_length: 2,
			too_short: "Name must be at least 2 characters long".to_string(),
			bad_charset: "Name can only contain letters, spaces, apostrophes, and hyphens"
				.to_string(),
		}
	}

	/// Override both failure messages.
	pub fn with_messages(
		mut self,
		too_short: impl Into<String>,
		bad_charset: impl Into<String>,
	) -> Self {
		self.too_short = too_short.into();
		self.bad_charset = bad_charset.into();
		self
	}

	/// Length check runs first, then the character-set check - so a short
	/// value with odd characters reports the length message.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() < self.min_length {
			return Err(FieldError::Validation(self.too_short.clone()));
		}
		if !NAME_REGEX.is_match(value) {
			return Err(FieldError::Validation(self.bad_charset.clone()));
		}
		Ok(())
	}
}

impl Default for NameValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates an email address against the loose `user@host.tld` shape.
///
/// # Examples
///
/// ```
/// use grappelli_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("bad-email").is_err());
/// assert!(validator.validate("two@@example.com").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: String,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self {
			message: "Please enter a valid email address".to_string(),
		}
	}

	/// Override the failure message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates a phone number: optional leading `+`, then at least ten
/// characters of digits, spaces, hyphens, or parentheses.
///
/// Deliberately permissive - it accepts most international formats as
/// typed and rejects anything shorter than ten characters. Emptiness is
/// the caller's concern (the phone field is optional).
///
/// # Examples
///
/// ```
/// use grappelli_forms::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("+1 (555) 123-4567").is_ok());
/// assert!(validator.validate("123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	message: String,
}

impl PhoneValidator {
	pub fn new() -> Self {
		Self {
			message: "Please enter a valid phone number (optional)".to_string(),
		}
	}

	/// Override the failure message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if PHONE_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates password complexity: minimum length plus at least one
/// lowercase letter, one uppercase letter, and one digit.
///
/// The three class checks are independent; order of characters is
/// irrelevant.
///
/// # Examples
///
/// ```
/// use grappelli_forms::validators::PasswordComplexityValidator;
///
/// let validator = PasswordComplexityValidator::new();
/// assert!(validator.validate("Str0ngpass").is_ok());
/// assert!(validator.validate("short1A").is_err());
/// assert!(validator.validate("alllowercase1").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordComplexityValidator {
	min_length: usize,
	/// Message when shorter than `min_length`
	too_short: String,
	/// Message when a required character class is missing
	missing_class: String,
}

impl PasswordComplexityValidator {
	pub fn new() -> Self {
		Self {
			min_length: 8,
			too_short: "Password must be at least 8 characters long".to_string(),
			missing_class: "Password must contain uppercase, lowercase, and number".to_string(),
		}
	}

	/// Override both failure messages.
	pub fn with_messages(
		mut self,
		too_short: impl Into<String>,
		missing_class: impl Into<String>,
	) -> Self {
		self.too_short = too_short.into();
		self.missing_class = missing_class.into();
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() < self.min_length {
			return Err(FieldError::Validation(self.too_short.clone()));
		}
		let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
		let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
		let has_digit = value.chars().any(|c| c.is_ascii_digit());
		if has_lower && has_upper && has_digit {
			Ok(())
		} else {
			Err(FieldError::Validation(self.missing_class.clone()))
		}
	}
}

impl Default for PasswordComplexityValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a value's character count falls within an inclusive
/// range, with a distinct message per bound.
///
/// Lengths are Unicode scalar counts, not bytes, so multi-byte text is
/// measured the way a user perceives it.
///
/// # Examples
///
/// ```
/// use grappelli_forms::validators::BoundedLengthValidator;
///
/// let validator = BoundedLengthValidator::new(10, 500, "too short", "too long");
/// assert!(validator.validate("exactly ten").is_ok());
/// assert!(validator.validate("nine char").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BoundedLengthValidator {
	min: usize,
	max: usize,
	below_min: String,
	above_max: String,
}

impl BoundedLengthValidator {
	pub fn new(
		min: usize,
		max: usize,
		below_min: impl Into<String>,
		above_max: impl Into<String>,
	) -> Self {
		Self {
			min,
			max,
			below_min: below_min.into(),
			above_max: above_max.into(),
		}
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let count = value.chars().count();
		if count < self.min {
			return Err(FieldError::Validation(self.below_min.clone()));
		}
		if count > self.max {
			return Err(FieldError::Validation(self.above_max.clone()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	// =========================================================================
	// NameValidator tests
	// =========================================================================

	#[rstest]
	#[case("Jo")]
	#[case("John Doe")]
	#[case("Mary-Jane O'Brien")]
	#[case("de la Cruz")]
	#[case("D'Artagnan")]
	fn test_name_validator_valid(#[case] name: &str) {
		// Arrange
		let validator = NameValidator::new();

		// Act
		let result = validator.validate(name);

		// Assert
		assert!(result.is_ok(), "Expected '{name}' to be a valid name");
	}

	#[rstest]
	#[case("")]
	#[case("J")]
	#[case("John2")]
	#[case("name@domain")]
	#[case("Anna_Smith")]
	fn test_name_validator_invalid(#[case] name: &str) {
		// Arrange
		let validator = NameValidator::new();

		// Act
		let result = validator.validate(name);

		// Assert
		assert!(result.is_err(), "Expected '{name}' to be an invalid name");
	}

	#[rstest]
	fn test_name_validator_short_value_reports_length_message() {
		// Arrange
		let validator = NameValidator::new();

		// Act: "4" is both too short and outside the charset
		let result = validator.validate("4");

		// Assert: the length rule wins
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Name must be at least 2 characters long");
			}
			_ => panic!("Expected Validation error"),
		}
	}

	#[rstest]
	fn test_name_validator_charset_message() {
		// Arrange
		let validator = NameValidator::new();

		// Act
		let result = validator.validate("John3 Doe");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(
					msg,
					"Name can only contain letters, spaces, apostrophes, and hyphens"
				);
			}
			_ => panic!("Expected Validation error"),
		}
	}

	// =========================================================================
	// EmailValidator tests
	// =========================================================================

	#[rstest]
	#[case("user@example.com")]
	#[case("first.last@sub.domain.org")]
	#[case("a@b.c")]
	#[case("user+tag@example.co.uk")]
	fn test_email_validator_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid email");
	}

	#[rstest]
	#[case("")]
	#[case("bad-email")]
	#[case("user@nodot")]
	#[case("@example.com")]
	#[case("user@.com")]
	#[case("user name@example.com")]
	#[case("user@exa mple.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_err(), "Expected '{email}' to be an invalid email");
	}

	#[rstest]
	fn test_email_validator_custom_message() {
		// Arrange
		let validator = EmailValidator::new().with_message("Custom email error");

		// Act
		let result = validator.validate("nope");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Custom email error"),
			_ => panic!("Expected Validation error with custom message"),
		}
	}

	// =========================================================================
	// PhoneValidator tests
	// =========================================================================

	#[rstest]
	#[case("1234567890")]
	#[case("+1 (555) 123-4567")]
	#[case("(020) 7946 0958")]
	#[case("555-123-4567")]
	fn test_phone_validator_valid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new();

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_ok(), "Expected '{phone}' to be a valid phone");
	}

	#[rstest]
	#[case("123")]
	#[case("123456789")]
	#[case("+123456789")]
	#[case("call me maybe")]
	#[case("555.123.4567")]
	fn test_phone_validator_invalid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new();

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_err(), "Expected '{phone}' to be an invalid phone");
	}

	#[rstest]
	fn test_phone_validator_plus_does_not_count_toward_minimum() {
		// Arrange: "+" followed by exactly ten digits passes, nine fails
		let validator = PhoneValidator::new();

		// Act & Assert
		assert!(validator.validate("+1234567890").is_ok());
		assert!(validator.validate("+123456789").is_err());
	}

	// =========================================================================
	// PasswordComplexityValidator tests
	// =========================================================================

	#[rstest]
	#[case("Passw0rd")]
	#[case("abcDEF123")]
	#[case("1A2b3C4d")]
	fn test_password_validator_valid(#[case] password: &str) {
		// Arrange
		let validator = PasswordComplexityValidator::new();

		// Act
		let result = validator.validate(password);

		// Assert
		assert!(result.is_ok(), "Expected '{password}' to satisfy the rule");
	}

	#[rstest]
	#[case("Ab1", "Password must be at least 8 characters long")]
	#[case("alllowercase1", "Password must contain uppercase, lowercase, and number")]
	#[case("ALLUPPERCASE1", "Password must contain uppercase, lowercase, and number")]
	#[case("NoDigitsHere", "Password must contain uppercase, lowercase, and number")]
	fn test_password_validator_invalid(#[case] password: &str, #[case] expected: &str) {
		// Arrange
		let validator = PasswordComplexityValidator::new();

		// Act
		let result = validator.validate(password);

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, expected),
			_ => panic!("Expected '{password}' to fail"),
		}
	}

	// =========================================================================
	// BoundedLengthValidator tests
	// =========================================================================

	#[rstest]
	fn test_bounded_length_boundaries() {
		// Arrange
		let validator = BoundedLengthValidator::new(10, 500, "short", "long");

		// Act & Assert: 9 fails, 10 and 500 pass, 501 fails
		assert!(validator.validate(&"x".repeat(9)).is_err());
		assert!(validator.validate(&"x".repeat(10)).is_ok());
		assert!(validator.validate(&"x".repeat(500)).is_ok());
		assert!(validator.validate(&"x".repeat(501)).is_err());
	}

	#[rstest]
	fn test_bounded_length_counts_chars_not_bytes() {
		// Arrange: 10 multi-byte characters (30 bytes in UTF-8)
		let validator = BoundedLengthValidator::new(10, 500, "short", "long");

		// Act
		let result = validator.validate(&"あ".repeat(10));

		// Assert
		assert!(result.is_ok());
	}

	#[rstest]
	fn test_bounded_length_distinct_messages() {
		// Arrange
		let validator = BoundedLengthValidator::new(2, 4, "below", "above");

		// Act & Assert
		assert_eq!(
			validator.validate("x"),
			Err(FieldError::Validation("below".to_string()))
		);
		assert_eq!(
			validator.validate("xxxxx"),
			Err(FieldError::Validation("above".to_string()))
		);
	}
}
