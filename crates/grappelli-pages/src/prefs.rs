//! Persisted page preferences
//!
//! The page keeps exactly one durable preference: the dark-mode flag.
//! [`PreferenceStore`] abstracts where it lives so the theme switch works
//! the same against an in-memory store (tests) or a JSON file on disk
//! (the local-storage analogue for native hosts).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Failure while reading or writing the preference backing store.
///
/// Callers treat these as non-fatal: a page without its saved theme
/// still loads with the default.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
	#[error("failed to access preference storage: {0}")]
	Io(#[from] std::io::Error),
	#[error("malformed preference data: {0}")]
	Format(#[from] serde_json::Error),
}

/// Durable home of the dark-mode flag.
pub trait PreferenceStore: Send {
	/// Read the saved flag; `None` when nothing has been saved yet.
	fn load_dark_mode(&self) -> Result<Option<bool>, PreferenceError>;

	/// Persist the flag.
	fn store_dark_mode(&mut self, dark: bool) -> Result<(), PreferenceError>;
}

/// Volatile store for tests and hosts without durable storage.
///
/// # Examples
///
/// ```
/// use grappelli_pages::prefs::{MemoryPreferences, PreferenceStore};
///
/// let mut store = MemoryPreferences::default();
/// assert_eq!(store.load_dark_mode().unwrap(), None);
///
/// store.store_dark_mode(true).unwrap();
/// assert_eq!(store.load_dark_mode().unwrap(), Some(true));
/// ```
#[derive(Debug, Default)]
pub struct MemoryPreferences {
	dark_mode: Option<bool>,
}

impl PreferenceStore for MemoryPreferences {
	fn load_dark_mode(&self) -> Result<Option<bool>, PreferenceError> {
		Ok(self.dark_mode)
	}

	fn store_dark_mode(&mut self, dark: bool) -> Result<(), PreferenceError> {
		self.dark_mode = Some(dark);
		Ok(())
	}
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
	dark_mode: Option<bool>,
}

/// Single-document JSON file store.
///
/// A missing file reads as "nothing saved"; writes create the file.
#[derive(Debug)]
pub struct JsonFilePreferences {
	path: PathBuf,
}

impl JsonFilePreferences {
	/// # Examples
	///
	/// ```no_run
	/// use grappelli_pages::prefs::JsonFilePreferences;
	///
	/// let store = JsonFilePreferences::new("preferences.json");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	fn read(&self) -> Result<PreferenceFile, PreferenceError> {
		if !self.path.exists() {
			return Ok(PreferenceFile::default());
		}
		let raw = fs::read_to_string(&self.path)?;
		Ok(serde_json::from_str(&raw)?)
	}
}

impl PreferenceStore for JsonFilePreferences {
	fn load_dark_mode(&self) -> Result<Option<bool>, PreferenceError> {
		Ok(self.read()?.dark_mode)
	}

	fn store_dark_mode(&mut self, dark: bool) -> Result<(), PreferenceError> {
		let mut file = self.read()?;
		file.dark_mode = Some(dark);
		fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
		Ok(())
	}
}
