//! Global keyboard shortcuts
//!
//! One explicit dispatch table for the page-wide `keydown` handling:
//! Ctrl+Arrow keys drive the counter, `h` opens the help overlay, Escape
//! closes the open FAQ item.

/// A key the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	ArrowUp,
	ArrowDown,
	Escape,
	Char(char),
}

/// One keydown event as the host delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
	pub key: Key,
	pub ctrl: bool,
}

impl KeyPress {
	pub fn new(key: Key) -> Self {
		Self { key, ctrl: false }
	}

	pub fn ctrl(key: Key) -> Self {
		Self { key, ctrl: true }
	}
}

/// Page-level action a shortcut resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
	IncrementCounter,
	DecrementCounter,
	ResetCounter,
	ShowHelp,
	CloseFaq,
}

/// Text of the help overlay.
pub const HELP_TEXT: &str = "🎮 Keyboard Shortcuts:\n\n\
	• Ctrl + ↑/↓ : Increment/Decrement counter\n\
	• Ctrl + R : Reset counter\n\
	• H : Show this help\n\
	• ESC : Close any open FAQ";

/// Resolve a keydown event to a page action, if it maps to one.
///
/// Counter shortcuts require Ctrl; the help key works with or without
/// modifiers; everything else falls through to `None`.
///
/// # Examples
///
/// ```
/// use grappelli_pages::shortcuts::{action_for, Key, KeyPress, PageAction};
///
/// let press = KeyPress::ctrl(Key::ArrowUp);
/// assert_eq!(action_for(&press), Some(PageAction::IncrementCounter));
///
/// let press = KeyPress::new(Key::Char('x'));
/// assert_eq!(action_for(&press), None);
/// ```
pub fn action_for(press: &KeyPress) -> Option<PageAction> {
	match (press.ctrl, press.key) {
		(true, Key::ArrowUp) => Some(PageAction::IncrementCounter),
		(true, Key::ArrowDown) => Some(PageAction::DecrementCounter),
		(true, Key::Char('r')) => Some(PageAction::ResetCounter),
		(_, Key::Char('h' | 'H')) => Some(PageAction::ShowHelp),
		(_, Key::Escape) => Some(PageAction::CloseFaq),
		_ => None,
	}
}
