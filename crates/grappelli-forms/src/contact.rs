//! The contact form: five fields wired with their rules, plus the
//! password strength meter
//!
//! [`ContactForm`] is the page's validation component in one piece: it
//! owns the [`Form`] engine configured with the page's field set and
//! keeps the strength meter in lockstep with the password field's
//! keystrokes.

use crate::bound::FieldView;
use crate::fields::{EmailField, NameField, PasswordField, PhoneField, TextAreaField};
use crate::form::{FieldStatus, Form, FormMessage, FormResult};
use crate::strength::PasswordStrength;

/// Identifiers of the contact form's fields - the closed set the host
/// markup exposes.
pub mod field_id {
	pub const FULL_NAME: &str = "full-name";
	pub const EMAIL: &str = "email";
	pub const PHONE: &str = "phone";
	pub const PASSWORD: &str = "password";
	pub const MESSAGE: &str = "message";

	/// Every field identifier, in form order.
	pub const ALL: [&str; 5] = [FULL_NAME, EMAIL, PHONE, PASSWORD, MESSAGE];
}

const SUCCESS_MESSAGE: &str = "Success! Your message has been sent successfully!";
const FAILURE_MESSAGE: &str = "Please fix the errors above and try again.";

/// The page's contact form: field rules, error slots, submission gate,
/// and password strength meter.
///
/// # Examples
///
/// ```
/// use grappelli_forms::contact::{field_id, ContactForm};
///
/// let mut form = ContactForm::new();
/// form.input(field_id::FULL_NAME, "Django Reinhardt").unwrap();
/// form.input(field_id::EMAIL, "django@example.com").unwrap();
/// form.input(field_id::PASSWORD, "Swing1935").unwrap();
/// form.input(field_id::MESSAGE, "Minor swing says hello.").unwrap();
///
/// assert!(form.submit());
/// assert!(form.message().unwrap().is_success());
/// // Submission cleared the form and reset the meter.
/// assert_eq!(form.strength().score(), 0);
/// ```
pub struct ContactForm {
	form: Form,
	strength: PasswordStrength,
}

impl ContactForm {
	/// Build the form with the page's five fields and messages.
	pub fn new() -> Self {
		let mut form = Form::new().with_result_messages(SUCCESS_MESSAGE, FAILURE_MESSAGE);
		form.add_field(Box::new(
			NameField::new(field_id::FULL_NAME).with_label("Full Name"),
		));
		form.add_field(Box::new(EmailField::new(field_id::EMAIL).with_label("Email")));
		form.add_field(Box::new(PhoneField::new(field_id::PHONE).with_label("Phone")));
		form.add_field(Box::new(
			PasswordField::new(field_id::PASSWORD)
				.with_label("Password")
				.with_help_text("At least 8 characters with uppercase, lowercase, and a number"),
		));
		form.add_field(Box::new(
			TextAreaField::new(
				field_id::MESSAGE,
				10,
				500,
				"Message must be at least 10 characters long",
				"Message must be less than 500 characters",
			)
			.with_label("Message"),
		));
		Self {
			form,
			strength: PasswordStrength::default(),
		}
	}

	/// Record a keystroke. Clears the field's stale error; for the
	/// password field the strength meter is recomputed from the raw text.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::contact::{field_id, ContactForm};
	///
	/// let mut form = ContactForm::new();
	/// form.input(field_id::PASSWORD, "abcdefgH1!").unwrap();
	/// assert_eq!(form.strength().score(), 5);
	/// ```
	pub fn input(&mut self, id: &str, text: impl Into<String>) -> FormResult<()> {
		let text = text.into();
		if id == field_id::PASSWORD {
			self.strength = PasswordStrength::measure(&text);
		}
		self.form.input(id, text)
	}

	/// Evaluate one field (the blur event). Returns its validity.
	pub fn blur(&mut self, id: &str) -> FormResult<bool> {
		self.form.blur(id)
	}

	/// Unconditionally clear one field's error slot and invalid mark.
	pub fn clear_error(&mut self, id: &str) -> FormResult<()> {
		self.form.clear_error(id)
	}

	/// Evaluate every field and gate the submission. On success the form
	/// is cleared and the strength meter reset as for an empty password.
	pub fn submit(&mut self) -> bool {
		let ok = self.form.submit();
		if ok {
			self.strength = PasswordStrength::default();
		}
		ok
	}

	/// Current strength meter reading.
	pub fn strength(&self) -> PasswordStrength {
		self.strength
	}

	/// Current text of one field, as typed.
	pub fn value(&self, id: &str) -> Option<&str> {
		self.form.value(id)
	}

	/// Current error-slot message of one field, if any.
	pub fn error(&self, id: &str) -> Option<&str> {
		self.form.error(id)
	}

	/// Current evaluation status of one field.
	pub fn status(&self, id: &str) -> Option<FieldStatus> {
		self.form.status(id)
	}

	/// Form-level result slot, set by the last submit.
	pub fn message(&self) -> Option<&FormMessage> {
		self.form.message()
	}

	/// Read-only view of one field for rendering.
	pub fn field(&self, id: &str) -> Option<FieldView<'_>> {
		self.form.field(id)
	}

	/// Read-only views of every field, in form order.
	pub fn fields(&self) -> Vec<FieldView<'_>> {
		self.form.fields()
	}
}

impl Default for ContactForm {
	fn default() -> Self {
		Self::new()
	}
}
