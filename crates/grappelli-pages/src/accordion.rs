//! Exclusive-open FAQ accordion

use tracing::debug;

/// One question/answer pair.
#[derive(Debug, Clone)]
pub struct FaqItem {
	pub question: String,
	pub answer: String,
}

impl FaqItem {
	pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
		Self {
			question: question.into(),
			answer: answer.into(),
		}
	}
}

/// FAQ accordion where at most one item is open: opening an item closes
/// every other one.
///
/// # Examples
///
/// ```
/// use grappelli_pages::accordion::{Accordion, FaqItem};
///
/// let mut faq = Accordion::new(vec![
///     FaqItem::new("What is this?", "An interactive page."),
///     FaqItem::new("Is it free?", "Yes."),
/// ]);
///
/// assert!(faq.toggle(0));
/// assert!(faq.toggle(1));
/// assert!(!faq.is_open(0)); // opening 1 closed 0
/// assert!(!faq.toggle(1));  // toggling the open item closes it
/// ```
#[derive(Debug, Default)]
pub struct Accordion {
	items: Vec<FaqItem>,
	open: Option<usize>,
}

impl Accordion {
	pub fn new(items: Vec<FaqItem>) -> Self {
		Self { items, open: None }
	}

	pub fn items(&self) -> &[FaqItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Toggle the item at `index`, closing any other open item. Returns
	/// whether the item is open afterwards; an out-of-range index is a
	/// no-op returning false.
	pub fn toggle(&mut self, index: usize) -> bool {
		if index >= self.items.len() {
			return false;
		}
		if self.open == Some(index) {
			self.open = None;
			debug!(index, "faq closed");
			false
		} else {
			self.open = Some(index);
			debug!(index, "faq opened");
			true
		}
	}

	/// Close the open item, if any (the Escape shortcut). Returns whether
	/// anything was closed.
	pub fn collapse(&mut self) -> bool {
		if self.open.take().is_some() {
			debug!("faq closed via collapse");
			true
		} else {
			false
		}
	}

	pub fn is_open(&self, index: usize) -> bool {
		self.open == Some(index)
	}

	/// Index of the open item, if any.
	pub fn open_index(&self) -> Option<usize> {
		self.open
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn three_item_faq() -> Accordion {
		Accordion::new(vec![
			FaqItem::new("q1", "a1"),
			FaqItem::new("q2", "a2"),
			FaqItem::new("q3", "a3"),
		])
	}

	#[rstest]
	fn test_opening_one_item_closes_the_others() {
		// Arrange
		let mut faq = three_item_faq();
		faq.toggle(0);

		// Act
		faq.toggle(2);

		// Assert
		assert!(!faq.is_open(0));
		assert!(faq.is_open(2));
		assert_eq!(faq.open_index(), Some(2));
	}

	#[rstest]
	fn test_toggle_same_item_twice_closes_it() {
		// Arrange
		let mut faq = three_item_faq();

		// Act & Assert
		assert!(faq.toggle(1));
		assert!(!faq.toggle(1));
		assert_eq!(faq.open_index(), None);
	}

	#[rstest]
	fn test_out_of_range_toggle_is_a_noop() {
		// Arrange
		let mut faq = three_item_faq();
		faq.toggle(0);

		// Act
		let opened = faq.toggle(7);

		// Assert: state untouched
		assert!(!opened);
		assert!(faq.is_open(0));
	}

	#[rstest]
	fn test_collapse_reports_whether_it_closed_anything() {
		// Arrange
		let mut faq = three_item_faq();

		// Act & Assert
		assert!(!faq.collapse());
		faq.toggle(1);
		assert!(faq.collapse());
		assert_eq!(faq.open_index(), None);
	}
}
