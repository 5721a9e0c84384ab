//! Interactive page widgets for Grappelli
//!
//! Headless state components for the page's peripheral behaviors, one
//! module per section of the page:
//!
//! - [`theme`] - dark-mode toggle with a persisted preference
//! - [`counter`] - the counter game with threshold messages
//! - [`accordion`] - exclusive-open FAQ
//! - [`tabs`] - tabbed panel switcher
//! - [`effects`] - decorative hover/press/double-click card states
//! - [`shortcuts`] - the global keyboard dispatch table
//! - [`page`] - the controller wiring all of it together
//! - [`prefs`] - where the dark-mode flag lives

pub mod accordion;
pub mod counter;
pub mod effects;
pub mod page;
pub mod prefs;
pub mod shortcuts;
pub mod tabs;
pub mod theme;

pub use accordion::{Accordion, FaqItem};
pub use counter::{Counter, CounterMessage, Tone};
pub use effects::{Card, CardDeck, SURPRISE_REVERT};
pub use page::{KeyResponse, Page, PageBuilder};
pub use prefs::{JsonFilePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
pub use shortcuts::{action_for, Key, KeyPress, PageAction, HELP_TEXT};
pub use tabs::Tabs;
pub use theme::{Theme, ThemeSwitch};
