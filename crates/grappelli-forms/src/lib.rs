//! Form processing and validation for Grappelli
//!
//! This crate is the validation core of the interactive page: per-field
//! rules with error-slot messages, the blur/input/submit evaluation
//! cycle, and the password strength meter.
//!
//! - [`Form`] - the live engine: registered fields, current values,
//!   error slots, evaluation statuses, and the form-level result message
//! - [`fields`] - the concrete field types (name, email, phone,
//!   password, bounded text area)
//! - [`validators`] - the reusable rule primitives behind the fields
//! - [`ContactForm`] - the page's five-field form, wired and ready
//! - [`PasswordStrength`] - the pure 0-5 strength meter

pub mod bound;
pub mod contact;
pub mod field;
pub mod fields;
pub mod form;
pub mod strength;
pub mod validators;

pub use bound::FieldView;
pub use contact::ContactForm;
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use form::{FieldStatus, Form, FormError, FormMessage, FormResult};
pub use strength::{PasswordStrength, StrengthLabel, StrengthReadout, STRENGTH_SYMBOLS};
