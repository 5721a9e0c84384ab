//! Theme toggle with persisted preference

use crate::prefs::PreferenceStore;
use tracing::{debug, warn};

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

/// The dark-mode toggle: owns the current theme and keeps the persisted
/// flag in sync.
///
/// Storage failures are logged and otherwise ignored - losing the saved
/// preference must never break the page.
///
/// # Examples
///
/// ```
/// use grappelli_pages::prefs::MemoryPreferences;
/// use grappelli_pages::theme::{Theme, ThemeSwitch};
///
/// let mut switch = ThemeSwitch::new(Box::new(MemoryPreferences::default()));
/// assert_eq!(switch.theme(), Theme::Light);
/// assert_eq!(switch.button_label(), "🌙 Dark Mode");
///
/// switch.toggle();
/// assert_eq!(switch.theme(), Theme::Dark);
/// assert_eq!(switch.body_class(), Some("dark-mode"));
/// ```
pub struct ThemeSwitch {
	theme: Theme,
	store: Box<dyn PreferenceStore>,
}

impl ThemeSwitch {
	/// Create the switch, restoring the saved preference.
	///
	/// A missing or unreadable preference falls back to [`Theme::Light`].
	pub fn new(store: Box<dyn PreferenceStore>) -> Self {
		let theme = match store.load_dark_mode() {
			Ok(Some(true)) => Theme::Dark,
			Ok(_) => Theme::Light,
			Err(err) => {
				warn!(error = %err, "could not restore theme preference");
				Theme::Light
			}
		};
		Self { theme, store }
	}

	pub fn theme(&self) -> Theme {
		self.theme
	}

	/// Flip the theme, persist the new flag, and return the new theme.
	pub fn toggle(&mut self) -> Theme {
		self.theme = match self.theme {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		};
		if let Err(err) = self.store.store_dark_mode(self.theme == Theme::Dark) {
			warn!(error = %err, "could not persist theme preference");
		}
		debug!(dark = self.theme == Theme::Dark, "theme toggled");
		self.theme
	}

	/// Label for the toggle button - it names the theme you would switch
	/// to, not the current one.
	pub fn button_label(&self) -> &'static str {
		match self.theme {
			Theme::Light => "🌙 Dark Mode",
			Theme::Dark => "☀️ Light Mode",
		}
	}

	/// CSS class the host applies to the page body, if any.
	pub fn body_class(&self) -> Option<&'static str> {
		match self.theme {
			Theme::Light => None,
			Theme::Dark => Some("dark-mode"),
		}
	}
}
