//! Counter game widget

use tracing::debug;

/// Mood of the counter's status message, mapped to a CSS class by the
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
	Neutral,
	Positive,
	Excellent,
	Negative,
}

impl Tone {
	/// CSS class suffix the host appends to the message element.
	pub fn css_class(&self) -> &'static str {
		match self {
			Tone::Neutral => "neutral",
			Tone::Positive => "positive",
			Tone::Excellent => "excellent",
			Tone::Negative => "negative",
		}
	}
}

/// Status line shown under the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterMessage {
	pub text: &'static str,
	pub tone: Tone,
}

/// The counter: a plain signed count with threshold-based messages.
///
/// # Examples
///
/// ```
/// use grappelli_pages::counter::{Counter, Tone};
///
/// let mut counter = Counter::new();
/// assert_eq!(counter.message().text, "Starting fresh! 🆕");
///
/// for _ in 0..6 {
///     counter.increment();
/// }
/// assert_eq!(counter.count(), 6);
/// assert_eq!(counter.message().tone, Tone::Excellent);
/// ```
#[derive(Debug, Default)]
pub struct Counter {
	count: i64,
}

impl Counter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn count(&self) -> i64 {
		self.count
	}

	pub fn increment(&mut self) -> i64 {
		self.count += 1;
		debug!(count = self.count, "counter incremented");
		self.count
	}

	pub fn decrement(&mut self) -> i64 {
		self.count -= 1;
		debug!(count = self.count, "counter decremented");
		self.count
	}

	pub fn reset(&mut self) -> i64 {
		self.count = 0;
		debug!("counter reset");
		self.count
	}

	/// Message for the current count: zero is a fresh start, one through
	/// five is encouragement, above five is excellent, below zero is the
	/// negative warning.
	pub fn message(&self) -> CounterMessage {
		match self.count {
			0 => CounterMessage {
				text: "Starting fresh! 🆕",
				tone: Tone::Neutral,
			},
			1..=5 => CounterMessage {
				text: "Looking good! 👍",
				tone: Tone::Positive,
			},
			6.. => CounterMessage {
				text: "You're on fire! 🔥",
				tone: Tone::Excellent,
			},
			_ => CounterMessage {
				text: "Going negative! 📉",
				tone: Tone::Negative,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, Tone::Neutral)]
	#[case(1, Tone::Positive)]
	#[case(5, Tone::Positive)]
	#[case(6, Tone::Excellent)]
	#[case(-1, Tone::Negative)]
	fn test_message_thresholds(#[case] target: i64, #[case] tone: Tone) {
		// Arrange
		let mut counter = Counter::new();

		// Act: walk the counter to the target value
		while counter.count() < target {
			counter.increment();
		}
		while counter.count() > target {
			counter.decrement();
		}

		// Assert
		assert_eq!(counter.message().tone, tone);
	}

	#[rstest]
	fn test_reset_returns_to_fresh_start() {
		// Arrange
		let mut counter = Counter::new();
		counter.increment();
		counter.increment();

		// Act
		let count = counter.reset();

		// Assert
		assert_eq!(count, 0);
		assert_eq!(counter.message().text, "Starting fresh! 🆕");
	}

	#[rstest]
	fn test_css_classes_match_host_styles() {
		// Assert
		assert_eq!(Tone::Neutral.css_class(), "neutral");
		assert_eq!(Tone::Excellent.css_class(), "excellent");
	}
}
