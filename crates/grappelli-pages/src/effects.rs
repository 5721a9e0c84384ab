//! Decorative card effects
//!
//! Pure visual state for the hover cards: every card lifts on hover, the
//! second card takes an accent background while pressed, and the third
//! card swaps to a gradient "surprise" on double-click that reverts after
//! three seconds. Expiry is driven by a caller-supplied clock so the
//! whole thing stays synchronous and testable.

use std::time::{Duration, Instant};
use tracing::debug;

/// How long the double-click surprise stays up before reverting.
pub const SURPRISE_REVERT: Duration = Duration::from_secs(3);

/// Which card reacts to press/release.
const PRESS_CARD: usize = 1;
/// Which card reacts to double-click.
const SURPRISE_CARD: usize = 2;

/// Visual state of one hover card.
#[derive(Debug, Default)]
pub struct Card {
	lifted: bool,
	pressed: bool,
	surprise_since: Option<Instant>,
}

impl Card {
	/// CSS transform for the card's current hover state.
	pub fn transform(&self) -> &'static str {
		if self.lifted {
			"translateY(-10px) scale(1.05)"
		} else {
			"translateY(0) scale(1)"
		}
	}

	pub fn is_lifted(&self) -> bool {
		self.lifted
	}

	pub fn is_pressed(&self) -> bool {
		self.pressed
	}

	pub fn surprise_active(&self) -> bool {
		self.surprise_since.is_some()
	}
}

/// The page's row of hover cards.
///
/// # Examples
///
/// ```
/// use grappelli_pages::effects::CardDeck;
/// use std::time::{Duration, Instant};
///
/// let mut deck = CardDeck::new(3);
/// deck.hover_enter(0);
/// assert_eq!(deck.card(0).unwrap().transform(), "translateY(-10px) scale(1.05)");
///
/// let clicked = Instant::now();
/// assert!(deck.double_click(2, clicked));
/// deck.tick(clicked + Duration::from_secs(4));
/// assert!(!deck.card(2).unwrap().surprise_active());
/// ```
#[derive(Debug, Default)]
pub struct CardDeck {
	cards: Vec<Card>,
}

impl CardDeck {
	pub fn new(count: usize) -> Self {
		Self {
			cards: (0..count).map(|_| Card::default()).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.cards.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	pub fn card(&self, index: usize) -> Option<&Card> {
		self.cards.get(index)
	}

	/// Pointer entered the card: apply the lift transform.
	pub fn hover_enter(&mut self, index: usize) {
		if let Some(card) = self.cards.get_mut(index) {
			card.lifted = true;
			debug!(index, "card hover enter");
		}
	}

	/// Pointer left the card: drop the lift (press state clears too).
	pub fn hover_leave(&mut self, index: usize) {
		if let Some(card) = self.cards.get_mut(index) {
			card.lifted = false;
			card.pressed = false;
			debug!(index, "card hover leave");
		}
	}

	/// Press on the accent card. Only the second card reacts; returns
	/// whether the press took effect.
	pub fn press(&mut self, index: usize) -> bool {
		if index != PRESS_CARD {
			return false;
		}
		if let Some(card) = self.cards.get_mut(index) {
			card.pressed = true;
			debug!(index, "card pressed");
			true
		} else {
			false
		}
	}

	pub fn release(&mut self, index: usize) {
		if let Some(card) = self.cards.get_mut(index) {
			card.pressed = false;
		}
	}

	/// Double-click on the surprise card. Only the third card reacts;
	/// the surprise reverts once [`tick`](Self::tick) observes
	/// [`SURPRISE_REVERT`] elapsed.
	pub fn double_click(&mut self, index: usize, now: Instant) -> bool {
		if index != SURPRISE_CARD {
			return false;
		}
		if let Some(card) = self.cards.get_mut(index) {
			card.surprise_since = Some(now);
			debug!(index, "card surprise shown");
			true
		} else {
			false
		}
	}

	/// Advance the decorative clock: revert any surprise older than
	/// [`SURPRISE_REVERT`].
	pub fn tick(&mut self, now: Instant) {
		for (index, card) in self.cards.iter_mut().enumerate() {
			if let Some(since) = card.surprise_since
				&& now.duration_since(since) >= SURPRISE_REVERT
			{
				card.surprise_since = None;
				debug!(index, "card surprise reverted");
			}
		}
	}
}
