//! Read-only field projection for rendering

use crate::field::{FormField, Widget};
use crate::form::FieldStatus;

/// One field's render-ready state: identity and display metadata from the
/// field definition, value/error/status from the live form.
pub struct FieldView<'a> {
	field: &'a dyn FormField,
	value: &'a str,
	error: Option<&'a str>,
	status: FieldStatus,
}

impl<'a> FieldView<'a> {
	pub(crate) fn new(
		field: &'a dyn FormField,
		value: &'a str,
		error: Option<&'a str>,
		status: FieldStatus,
	) -> Self {
		Self {
			field,
			value,
			error,
			status,
		}
	}

	/// Field identifier (the input element id).
	pub fn name(&self) -> &str {
		self.field.name()
	}

	/// Identifier of the field's error-message slot.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::contact::{field_id, ContactForm};
	///
	/// let form = ContactForm::new();
	/// let view = form.field(field_id::EMAIL).unwrap();
	/// assert_eq!(view.error_slot_id(), "email-error");
	/// ```
	pub fn error_slot_id(&self) -> String {
		format!("{}-error", self.field.name())
	}

	/// Identifier the field's label element points at.
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.field.name())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}

	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}

	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	/// Current text, as typed.
	pub fn value(&self) -> &str {
		self.value
	}

	/// Current error-slot message, if any.
	pub fn error(&self) -> Option<&str> {
		self.error
	}

	pub fn status(&self) -> FieldStatus {
		self.status
	}

	/// Whether the field should carry the visual-invalid mark.
	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}
}
