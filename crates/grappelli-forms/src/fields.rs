//! Concrete field types for the contact form
//!
//! One field type per rule in the page's closed identifier set. Each is a
//! builder-style struct implementing [`crate::field::FormField`].

mod email_field;
mod name_field;
mod password_field;
mod phone_field;
mod textarea_field;

pub use email_field::EmailField;
pub use name_field::NameField;
pub use password_field::PasswordField;
pub use phone_field::PhoneField;
pub use textarea_field::TextAreaField;
