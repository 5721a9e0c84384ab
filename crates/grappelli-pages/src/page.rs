//! Page controller
//!
//! [`Page`] is the load-time wiring in one place: it owns every
//! interactive component, restores the persisted theme, and routes
//! global key events to the right component. Hosts call its methods from
//! their event handlers and read back display state.

use crate::accordion::{Accordion, FaqItem};
use crate::counter::Counter;
use crate::effects::CardDeck;
use crate::prefs::PreferenceStore;
use crate::shortcuts::{action_for, KeyPress, PageAction, HELP_TEXT};
use crate::tabs::Tabs;
use crate::theme::ThemeSwitch;
use grappelli_forms::ContactForm;
use tracing::info;

/// What a routed key event did, for hosts that render a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
	/// The counter changed; carries the new count.
	Counter(i64),
	/// The help overlay should be shown with this text.
	Help(&'static str),
	/// The open FAQ item was closed (false when none was open).
	FaqClosed(bool),
}

/// The whole interactive page, headless.
///
/// # Examples
///
/// ```
/// use grappelli_pages::page::Page;
/// use grappelli_pages::prefs::MemoryPreferences;
/// use grappelli_pages::shortcuts::{Key, KeyPress};
/// use grappelli_pages::theme::Theme;
///
/// let mut page = Page::builder()
///     .faq(vec![("What is this?", "A demo page.")])
///     .tabs(vec!["overview", "details"])
///     .cards(3)
///     .build(Box::new(MemoryPreferences::default()));
///
/// assert_eq!(page.theme().theme(), Theme::Light);
/// page.handle_key(KeyPress::ctrl(Key::ArrowUp));
/// assert_eq!(page.counter().count(), 1);
/// ```
pub struct Page {
	theme: ThemeSwitch,
	counter: Counter,
	faq: Accordion,
	tabs: Tabs,
	cards: CardDeck,
	contact: ContactForm,
}

/// Builder for [`Page`]: the host describes its markup (FAQ entries, tab
/// panel ids, card count) and supplies the preference store.
#[derive(Default)]
pub struct PageBuilder {
	faq: Vec<FaqItem>,
	tabs: Vec<String>,
	cards: usize,
}

impl PageBuilder {
	pub fn faq(mut self, items: Vec<(&str, &str)>) -> Self {
		self.faq = items
			.into_iter()
			.map(|(q, a)| FaqItem::new(q, a))
			.collect();
		self
	}

	pub fn tabs(mut self, panels: Vec<&str>) -> Self {
		self.tabs = panels.into_iter().map(String::from).collect();
		self
	}

	pub fn cards(mut self, count: usize) -> Self {
		self.cards = count;
		self
	}

	/// Wire everything up, restoring the persisted theme.
	pub fn build(self, store: Box<dyn PreferenceStore>) -> Page {
		let page = Page {
			theme: ThemeSwitch::new(store),
			counter: Counter::new(),
			faq: Accordion::new(self.faq),
			tabs: Tabs::new(self.tabs),
			cards: CardDeck::new(self.cards),
			contact: ContactForm::new(),
		};
		info!("interactive page initialized");
		page
	}
}

impl Page {
	pub fn builder() -> PageBuilder {
		PageBuilder::default()
	}

	/// Route a global keydown through the shortcut table and apply it.
	/// Returns what happened, or `None` for unmapped keys.
	pub fn handle_key(&mut self, press: KeyPress) -> Option<KeyResponse> {
		match action_for(&press)? {
			PageAction::IncrementCounter => Some(KeyResponse::Counter(self.counter.increment())),
			PageAction::DecrementCounter => Some(KeyResponse::Counter(self.counter.decrement())),
			PageAction::ResetCounter => Some(KeyResponse::Counter(self.counter.reset())),
			PageAction::ShowHelp => Some(KeyResponse::Help(HELP_TEXT)),
			PageAction::CloseFaq => Some(KeyResponse::FaqClosed(self.faq.collapse())),
		}
	}

	pub fn theme(&self) -> &ThemeSwitch {
		&self.theme
	}

	pub fn theme_mut(&mut self) -> &mut ThemeSwitch {
		&mut self.theme
	}

	pub fn counter(&self) -> &Counter {
		&self.counter
	}

	pub fn counter_mut(&mut self) -> &mut Counter {
		&mut self.counter
	}

	pub fn faq(&self) -> &Accordion {
		&self.faq
	}

	pub fn faq_mut(&mut self) -> &mut Accordion {
		&mut self.faq
	}

	pub fn tabs(&self) -> &Tabs {
		&self.tabs
	}

	pub fn tabs_mut(&mut self) -> &mut Tabs {
		&mut self.tabs
	}

	pub fn cards(&self) -> &CardDeck {
		&self.cards
	}

	pub fn cards_mut(&mut self) -> &mut CardDeck {
		&mut self.cards
	}

	pub fn contact(&self) -> &ContactForm {
		&self.contact
	}

	pub fn contact_mut(&mut self) -> &mut ContactForm {
		&mut self.contact
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::prefs::{MemoryPreferences, PreferenceStore};
	use crate::shortcuts::Key;
	use crate::theme::Theme;
	use rstest::rstest;

	fn demo_page() -> Page {
		Page::builder()
			.faq(vec![("q1", "a1"), ("q2", "a2")])
			.tabs(vec!["overview", "details"])
			.cards(3)
			.build(Box::new(MemoryPreferences::default()))
	}

	#[rstest]
	fn test_counter_keyboard_shortcuts_drive_the_counter() {
		// Arrange
		let mut page = demo_page();

		// Act
		page.handle_key(KeyPress::ctrl(Key::ArrowUp));
		page.handle_key(KeyPress::ctrl(Key::ArrowUp));
		let response = page.handle_key(KeyPress::ctrl(Key::ArrowDown));

		// Assert
		assert_eq!(response, Some(KeyResponse::Counter(1)));
		assert_eq!(page.counter().count(), 1);
	}

	#[rstest]
	fn test_escape_closes_the_open_faq_item() {
		// Arrange
		let mut page = demo_page();
		page.faq_mut().toggle(1);

		// Act
		let response = page.handle_key(KeyPress::new(Key::Escape));

		// Assert
		assert_eq!(response, Some(KeyResponse::FaqClosed(true)));
		assert_eq!(page.faq().open_index(), None);
	}

	#[rstest]
	fn test_help_key_returns_the_overlay_text() {
		// Arrange
		let mut page = demo_page();

		// Act
		let response = page.handle_key(KeyPress::new(Key::Char('h')));

		// Assert
		assert!(matches!(response, Some(KeyResponse::Help(text)) if text.contains("Ctrl + R")));
	}

	#[rstest]
	fn test_unmapped_key_does_nothing() {
		// Arrange
		let mut page = demo_page();

		// Act
		let response = page.handle_key(KeyPress::new(Key::Char('q')));

		// Assert
		assert_eq!(response, None);
		assert_eq!(page.counter().count(), 0);
	}

	#[rstest]
	fn test_page_restores_saved_theme_on_build() {
		// Arrange
		let mut store = MemoryPreferences::default();
		store.store_dark_mode(true).unwrap();

		// Act
		let page = Page::builder().build(Box::new(store));

		// Assert
		assert_eq!(page.theme().theme(), Theme::Dark);
	}
}
