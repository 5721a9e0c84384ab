//! Password strength meter
//!
//! The meter counts satisfied complexity criteria and maps the count to a
//! label, a fill ratio, and an indicator color. It is pure: every call
//! recomputes from the full text, so the host can feed it each keystroke.

use serde::Serialize;
use std::fmt;

/// Symbols that satisfy the "contains a symbol" criterion.
pub const STRENGTH_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Step-function label over the 0-5 criteria count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
	/// 0-1 criteria
	Weak,
	/// 2-3 criteria
	Medium,
	/// 4 criteria
	Strong,
	/// All 5 criteria
	VeryStrong,
}

impl fmt::Display for StrengthLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = match self {
			StrengthLabel::Weak => "Weak",
			StrengthLabel::Medium => "Medium",
			StrengthLabel::Strong => "Strong",
			StrengthLabel::VeryStrong => "Very Strong",
		};
		write!(f, "{text}")
	}
}

/// Measured strength of a password: the count of satisfied criteria among
/// length >= 8, lowercase, uppercase, digit, and symbol.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{PasswordStrength, StrengthLabel};
///
/// let strength = PasswordStrength::measure("abcdefgH1!");
/// assert_eq!(strength.score(), 5);
/// assert_eq!(strength.label(), StrengthLabel::VeryStrong);
/// assert_eq!(strength.percent(), 100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordStrength {
	score: u8,
}

impl PasswordStrength {
	/// Measure the given password text.
	///
	/// Scores the text exactly as typed - the meter runs on keystrokes,
	/// before any trimming the field rule would apply.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::PasswordStrength;
	///
	/// assert_eq!(PasswordStrength::measure("").score(), 0);
	/// assert_eq!(PasswordStrength::measure("abcdefgh").score(), 2);
	/// assert_eq!(PasswordStrength::measure("abcdefgH1").score(), 4);
	/// ```
	pub fn measure(password: &str) -> Self {
		let mut score = 0u8;
		if password.chars().count() >= 8 {
			score += 1;
		}
		if password.chars().any(|c| c.is_ascii_lowercase()) {
			score += 1;
		}
		if password.chars().any(|c| c.is_ascii_uppercase()) {
			score += 1;
		}
		if password.chars().any(|c| c.is_ascii_digit()) {
			score += 1;
		}
		if password.chars().any(|c| STRENGTH_SYMBOLS.contains(c)) {
			score += 1;
		}
		Self { score }
	}

	/// Criteria count in `0..=5`.
	pub fn score(&self) -> u8 {
		self.score
	}

	/// Step-function label for the current score.
	pub fn label(&self) -> StrengthLabel {
		match self.score {
			0 | 1 => StrengthLabel::Weak,
			2 | 3 => StrengthLabel::Medium,
			4 => StrengthLabel::Strong,
			_ => StrengthLabel::VeryStrong,
		}
	}

	/// Indicator fill ratio in `0.0..=1.0` (score x 20%).
	pub fn ratio(&self) -> f32 {
		f32::from(self.score) * 0.2
	}

	/// Indicator fill percentage in `0..=100`.
	pub fn percent(&self) -> u8 {
		self.score * 20
	}

	/// Indicator bar color for the current label.
	pub fn color(&self) -> &'static str {
		match self.label() {
			StrengthLabel::Weak => "#ff4757",
			StrengthLabel::Medium => "#ffa502",
			StrengthLabel::Strong => "#2ed573",
			StrengthLabel::VeryStrong => "#1e90ff",
		}
	}

	/// Serializable snapshot for a rendering layer.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::PasswordStrength;
	///
	/// let readout = PasswordStrength::measure("abcdefgH1!").readout();
	/// let json = serde_json::to_string(&readout).unwrap();
	/// assert!(json.contains("\"percent\":100"));
	/// ```
	pub fn readout(&self) -> StrengthReadout {
		StrengthReadout {
			score: self.score,
			label: self.label(),
			text: self.label().to_string(),
			percent: self.percent(),
			color: self.color(),
		}
	}
}

/// Plain-data strength snapshot for display layers.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReadout {
	pub score: u8,
	pub label: StrengthLabel,
	/// Human-readable label text ("Weak" .. "Very Strong")
	pub text: String,
	pub percent: u8,
	pub color: &'static str,
}
