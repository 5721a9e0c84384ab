//! Property-based tests for the password strength meter
//!
//! # Properties Tested
//!
//! - Purity: measuring the same text twice yields identical readings
//! - Range: the score is always in 0..=5 and percent is score x 20
//! - Monotonicity: appending a character never lowers the score
//! - Label steps: the label is a function of the score alone

use grappelli_forms::{PasswordStrength, StrengthLabel, STRENGTH_SYMBOLS};
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

/// Strategy for arbitrary password-ish text, including symbols and
/// multi-byte characters.
fn password_strategy() -> impl Strategy<Value = String> {
	prop::string::string_regex(r#"[a-zA-Z0-9 !@#$%^&*(),.?":{}|<>é日]{0,24}"#)
		.expect("Valid regex for password text")
}

/// Strategy for a single appended character drawn from the same alphabet.
fn appended_char_strategy() -> impl Strategy<Value = char> {
	prop::sample::select(
		r#"abcXYZ019 !@#,."#
			.chars()
			.collect::<Vec<_>>(),
	)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
	/// Property: measurement is pure - same input, same reading.
	#[test]
	fn test_measure_is_deterministic(password in password_strategy()) {
		let first = PasswordStrength::measure(&password);
		let second = PasswordStrength::measure(&password);

		prop_assert_eq!(first.score(), second.score());
		prop_assert_eq!(first.label(), second.label());
		prop_assert_eq!(first.percent(), second.percent());
	}

	/// Property: the score stays in range and percent tracks it.
	#[test]
	fn test_score_range_and_percent(password in password_strategy()) {
		let strength = PasswordStrength::measure(&password);

		prop_assert!(strength.score() <= 5);
		prop_assert_eq!(strength.percent(), strength.score() * 20);
		prop_assert!(strength.ratio() >= 0.0 && strength.ratio() <= 1.0);
	}

	/// Property: appending a character never lowers the score - every
	/// criterion is monotone in the text's character multiset/length.
	#[test]
	fn test_appending_never_lowers_score(
		password in password_strategy(),
		appended in appended_char_strategy(),
	) {
		let before = PasswordStrength::measure(&password).score();

		let mut longer = password.clone();
		longer.push(appended);
		let after = PasswordStrength::measure(&longer).score();

		prop_assert!(after >= before, "{password:?} + {appended:?}: {before} -> {after}");
	}

	/// Property: the label is a step function of the score alone.
	#[test]
	fn test_label_is_a_step_function_of_score(password in password_strategy()) {
		let strength = PasswordStrength::measure(&password);
		let expected = match strength.score() {
			0 | 1 => StrengthLabel::Weak,
			2 | 3 => StrengthLabel::Medium,
			4 => StrengthLabel::Strong,
			_ => StrengthLabel::VeryStrong,
		};

		prop_assert_eq!(strength.label(), expected);
	}
}

// =============================================================================
// Worked example from the page: each added criterion raises the reading
// =============================================================================

#[test]
fn test_criteria_ladder() {
	let ladder = [
		("abcdefgh", 2, StrengthLabel::Medium),
		("abcdefgH", 3, StrengthLabel::Medium),
		("abcdefgH1", 4, StrengthLabel::Strong),
		("abcdefgH1!", 5, StrengthLabel::VeryStrong),
	];

	for (password, score, label) in ladder {
		let strength = PasswordStrength::measure(password);
		assert_eq!(strength.score(), score, "score for {password:?}");
		assert_eq!(strength.label(), label, "label for {password:?}");
	}
}

#[test]
fn test_every_symbol_in_the_fixed_set_counts() {
	for symbol in STRENGTH_SYMBOLS.chars() {
		let strength = PasswordStrength::measure(&symbol.to_string());
		assert_eq!(strength.score(), 1, "symbol {symbol:?} should score");
	}
}
