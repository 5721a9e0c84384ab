//! # Grappelli
//!
//! A headless behavior kit for an interactive web page: the validation and
//! state-machine core behind a contact/landing page, with no DOM attached.
//!
//! Grappelli models every interactive behavior as an explicit state
//! component with handler methods that take the triggering input as a
//! parameter. That keeps the whole page unit-testable without a browser:
//! the host (a renderer, a WASM shell, a test) delivers input/blur/submit
//! and key events, and reads back values, error slots, labels, and CSS
//! hints.
//!
//! ## Crates
//!
//! - [`forms`] - the contact-form validation engine: per-field rules,
//!   error slots, the blur/input/submit state machine, and the password
//!   strength meter.
//! - [`pages`] - the peripheral page widgets: theme toggle with a
//!   persisted preference, counter with keyboard shortcuts, exclusive-open
//!   FAQ accordion, tab switcher, decorative card effects, and the page
//!   controller that wires them together.
//!
//! ## Feature Flags
//!
//! - `forms` - validation core only
//! - `pages` - page widgets (implies `forms`)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use grappelli::forms::contact::{ContactForm, field_id};
//!
//! let mut form = ContactForm::new();
//! form.input(field_id::EMAIL, "not-an-email").unwrap();
//! assert!(!form.blur(field_id::EMAIL).unwrap());
//! assert_eq!(
//!     form.error(field_id::EMAIL),
//!     Some("Please enter a valid email address"),
//! );
//! ```

#[cfg(feature = "forms")]
pub use grappelli_forms as forms;
#[cfg(feature = "pages")]
pub use grappelli_pages as pages;

/// Re-export of the most commonly used types.
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::forms::{
		ContactForm, FieldStatus, FieldView, Form, FormField, FormMessage, PasswordStrength,
		StrengthLabel, Widget,
	};
	#[cfg(feature = "pages")]
	pub use crate::pages::{
		Accordion, CardDeck, Counter, Key, KeyPress, Page, PageAction, Tabs, Theme, ThemeSwitch,
	};
}
