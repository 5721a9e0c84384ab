//! Tabbed panel switcher

use tracing::debug;

/// Tab strip with exactly one active panel (when any panels exist).
///
/// Panels are addressed by their id, mirroring the `data-tab` attribute
/// in the host markup.
///
/// # Examples
///
/// ```
/// use grappelli_pages::tabs::Tabs;
///
/// let mut tabs = Tabs::new(vec!["overview".into(), "details".into()]);
/// assert_eq!(tabs.active_panel(), Some("overview"));
///
/// assert!(tabs.activate("details"));
/// assert!(tabs.is_active("details"));
/// assert!(!tabs.activate("missing"));
/// assert_eq!(tabs.active_panel(), Some("details"));
/// ```
#[derive(Debug, Default)]
pub struct Tabs {
	panels: Vec<String>,
	active: usize,
}

impl Tabs {
	/// Create the strip; the first panel starts active.
	pub fn new(panels: Vec<String>) -> Self {
		Self { panels, active: 0 }
	}

	pub fn panels(&self) -> &[String] {
		&self.panels
	}

	/// Activate the panel with the given id. Unknown ids leave the state
	/// untouched and return false.
	pub fn activate(&mut self, id: &str) -> bool {
		match self.panels.iter().position(|p| p == id) {
			Some(index) => {
				self.active = index;
				debug!(panel = id, "tab activated");
				true
			}
			None => false,
		}
	}

	/// Id of the active panel; `None` only when the strip has no panels.
	pub fn active_panel(&self) -> Option<&str> {
		self.panels.get(self.active).map(String::as_str)
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.active_panel() == Some(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn strip() -> Tabs {
		Tabs::new(vec!["html".into(), "css".into(), "js".into()])
	}

	#[rstest]
	fn test_first_panel_starts_active() {
		// Arrange
		let tabs = strip();

		// Assert
		assert!(tabs.is_active("html"));
	}

	#[rstest]
	fn test_activation_is_exclusive() {
		// Arrange
		let mut tabs = strip();

		// Act
		tabs.activate("css");

		// Assert
		assert!(tabs.is_active("css"));
		assert!(!tabs.is_active("html"));
		assert!(!tabs.is_active("js"));
	}

	#[rstest]
	fn test_unknown_id_keeps_current_panel() {
		// Arrange
		let mut tabs = strip();
		tabs.activate("js");

		// Act
		let switched = tabs.activate("python");

		// Assert
		assert!(!switched);
		assert_eq!(tabs.active_panel(), Some("js"));
	}

	#[rstest]
	fn test_empty_strip_has_no_active_panel() {
		// Arrange
		let tabs = Tabs::new(vec![]);

		// Assert
		assert_eq!(tabs.active_panel(), None);
	}
}
