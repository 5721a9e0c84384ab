//! Facade surface tests: the re-exports a downstream host relies on.

use grappelli::prelude::*;
use rstest::rstest;

#[rstest]
fn test_forms_surface_is_reachable_through_the_facade() {
	// Arrange
	let mut form = ContactForm::new();

	// Act
	form.input("email", "user@example.com").unwrap();
	let valid = form.blur("email").unwrap();

	// Assert
	assert!(valid);
	assert_eq!(form.status("email"), Some(FieldStatus::Valid));
}

#[rstest]
fn test_pages_surface_is_reachable_through_the_facade() {
	// Arrange
	let mut page = Page::builder()
		.tabs(vec!["one", "two"])
		.build(Box::new(grappelli::pages::MemoryPreferences::default()));

	// Act
	page.handle_key(KeyPress::ctrl(Key::ArrowUp));
	page.theme_mut().toggle();

	// Assert
	assert_eq!(page.counter().count(), 1);
	assert_eq!(page.theme().theme(), Theme::Dark);
}

#[rstest]
fn test_prelude_covers_the_strength_meter() {
	// Act
	let strength = PasswordStrength::measure("abcdefgH1!");

	// Assert
	assert_eq!(strength.label(), StrengthLabel::VeryStrong);
}
