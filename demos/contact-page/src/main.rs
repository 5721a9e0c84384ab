//! Scripted drive of the interactive page.
//!
//! Replays a realistic session against the headless page state - theme
//! toggle, keyboard shortcuts, FAQ, tabs, card effects, and a contact
//! form filled wrong once and then corrected - printing what a renderer
//! would show at each step. Run with `RUST_LOG=debug` to see the
//! interaction events.

use anyhow::Result;
use grappelli::forms::contact::field_id;
use grappelli::pages::page::{KeyResponse, Page};
use grappelli::pages::prefs::JsonFilePreferences;
use grappelli::pages::shortcuts::{Key, KeyPress};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let prefs_path = std::env::temp_dir().join("contact-page-prefs.json");
	let mut page = Page::builder()
		.faq(vec![
			("What is this page?", "A playground for page behaviors."),
			("Is my data sent anywhere?", "No - everything stays client-side."),
			("Can I use the keyboard?", "Press H for the shortcut list."),
		])
		.tabs(vec!["html", "css", "js"])
		.cards(3)
		.build(Box::new(JsonFilePreferences::new(&prefs_path)));

	// Theme: restore + toggle, like clicking the header button.
	println!("theme on load: {:?}", page.theme().theme());
	page.theme_mut().toggle();
	println!(
		"after toggle:  {:?} (button now says {:?})",
		page.theme().theme(),
		page.theme().button_label()
	);

	// Counter via its keyboard shortcuts.
	for _ in 0..7 {
		page.handle_key(KeyPress::ctrl(Key::ArrowUp));
	}
	let status = page.counter().message();
	println!(
		"counter at {}: {} [{}]",
		page.counter().count(),
		status.text,
		status.tone.css_class()
	);
	if let Some(KeyResponse::Help(help)) = page.handle_key(KeyPress::new(Key::Char('h'))) {
		println!("\n{help}\n");
	}

	// FAQ and tabs.
	page.faq_mut().toggle(0);
	page.faq_mut().toggle(2);
	println!("open faq item: {:?}", page.faq().open_index());
	page.handle_key(KeyPress::new(Key::Escape));
	println!("after ESC:     {:?}", page.faq().open_index());
	page.tabs_mut().activate("css");
	println!("active tab:    {:?}", page.tabs().active_panel());

	// Card effects, including the timed surprise revert.
	let clicked = Instant::now();
	page.cards_mut().hover_enter(0);
	page.cards_mut().double_click(2, clicked);
	println!(
		"card 0 transform: {}",
		page.cards().card(0).unwrap().transform()
	);
	page.cards_mut().tick(clicked + Duration::from_secs(4));
	println!(
		"surprise still up after 4s tick: {}",
		page.cards().card(2).unwrap().surprise_active()
	);

	// Contact form: wrong once, corrected, submitted.
	let contact = page.contact_mut();
	contact.input(field_id::FULL_NAME, "Django Reinhardt")?;
	contact.input(field_id::EMAIL, "django@hotclub")?;
	contact.input(field_id::PHONE, "")?;
	contact.input(field_id::PASSWORD, "minorswing")?;
	contact.input(field_id::MESSAGE, "Three-finger chords, full-hand sound.")?;

	for id in field_id::ALL {
		contact.blur(id)?;
	}
	println!("\nfirst submit accepted: {}", contact.submit());
	for view in contact.fields() {
		if let Some(error) = view.error() {
			println!("  {} -> {}", view.error_slot_id(), error);
		}
	}
	println!("form message: {:?}", contact.message().map(|m| m.text()));

	contact.input(field_id::EMAIL, "django@hotclub.fr")?;
	contact.input(field_id::PASSWORD, "MinorSwing1937!")?;
	let strength = contact.strength().readout();
	println!(
		"password meter: {} ({}%, {})",
		strength.text, strength.percent, strength.color
	);

	println!("second submit accepted: {}", contact.submit());
	println!("form message: {:?}", contact.message().map(|m| m.text()));
	println!("meter after reset: {}%", contact.strength().percent());

	Ok(())
}
