//! Browsing the host's input history.
//!
//! Index `0` is the live text the user was typing; index `n` is the `n`-th
//! most recent history entry. The live text is cached when browsing starts
//! and comes back when browsing returns to index `0`.

use prompter_host::HistoryAccess;
use tracing::trace;


/// History cursor for one prompt session.
#[derive(Debug, Clone, Default)]
pub struct History {
	kind: String,
	index: usize,
	cached: String,
	backward: String,
	threshold: usize,
}

impl History {
	/// A cursor over the `kind` history (`"input"`, `"search"`, ...).
	pub fn new(kind: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			..Self::default()
		}
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	pub fn index(&self) -> usize {
		self.index
	}

	/// Stops browsing and forgets the cached text.
	pub fn reset(&mut self) {
		self.index = 0;
		self.cached.clear();
		self.backward.clear();
		self.threshold = 0;
	}

	/// The history entry at the current index, `None` while not browsing.
	pub fn current<H: HistoryAccess + ?Sized>(&self, host: &H) -> Option<String> {
		match self.index {
			0 => None,
			index => self.entry(host, index),
		}
	}

	/// Steps one entry into the past.
	///
	/// `text` and `backward` are the live text and the part before the caret;
	/// they are only read when browsing starts.
	pub fn previous<H: HistoryAccess + ?Sized>(&mut self, host: &H, text: &str, backward: &str) -> String {
		self.start(host, text, backward);
		if self.index < self.threshold {
			self.index += 1;
		}
		trace!(index = self.index, "history previous");
		self.land(host)
	}

	/// Steps one entry towards the live text.
	///
	/// When not browsing, `text` is returned unchanged.
	pub fn next<H: HistoryAccess + ?Sized>(&mut self, host: &H, text: &str) -> String {
		if self.index == 0 {
			return text.to_string();
		}
		self.index -= 1;
		trace!(index = self.index, "history next");
		self.land(host)
	}

	/// Steps to the next older entry starting with the text that was before
	/// the caret when browsing started. Stays put when there is none.
	pub fn previous_match<H: HistoryAccess + ?Sized>(&mut self, host: &H, text: &str, backward: &str) -> String {
		self.start(host, text, backward);
		if let Some(index) = (self.index + 1..=self.threshold).find(|&i| self.matches(host, i)) {
			self.index = index;
		}
		trace!(index = self.index, prefix = %self.backward, "history previous match");
		self.land(host)
	}

	/// Steps to the next newer matching entry, or back to the live text.
	///
	/// When not browsing, `text` is returned unchanged.
	pub fn next_match<H: HistoryAccess + ?Sized>(&mut self, host: &H, text: &str) -> String {
		if self.index == 0 {
			return text.to_string();
		}
		self.index = (1..self.index)
			.rev()
			.find(|&i| self.matches(host, i))
			.unwrap_or(0);
		trace!(index = self.index, prefix = %self.backward, "history next match");
		self.land(host)
	}

	/// Text for the index just moved to. Arriving at index `0` hands back the
	/// cached live text and ends browsing.
	fn land<H: HistoryAccess + ?Sized>(&mut self, host: &H) -> String {
		if self.index == 0 {
			let live = std::mem::take(&mut self.cached);
			self.reset();
			return live;
		}
		self.entry(host, self.index).unwrap_or_default()
	}

	fn start<H: HistoryAccess + ?Sized>(&mut self, host: &H, text: &str, backward: &str) {
		if self.index == 0 {
			self.cached = text.to_string();
			self.backward = backward.to_string();
			self.threshold = host.history_len(&self.kind);
		}
	}

	fn entry<H: HistoryAccess + ?Sized>(&self, host: &H, index: usize) -> Option<String> {
		let offset = isize::try_from(index).ok()?;
		host.history_get(&self.kind, -offset)
	}

	fn matches<H: HistoryAccess + ?Sized>(&self, host: &H, index: usize) -> bool {
		self.entry(host, index)
			.is_some_and(|entry| entry.starts_with(&self.backward))
	}
}
