//! Editable text state and the caret view over it.

use serde::{Deserialize, Serialize};


/// Character index into the prompt text.
pub type CharIdx = usize;

/// The editable line: text plus caret position.
///
/// This is the single source of truth for the prompt's text. A clone is a
/// complete snapshot; restoring one puts the prompt back exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
	text: String,
	caret_locus: CharIdx,
}

/// A saved [`Context`].
pub type Snapshot = Context;

impl Context {
	/// Creates a context with the caret at the end of `text`.
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let caret_locus = text.chars().count();
		Self { text, caret_locus }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replaces the text, clamping the caret into the new bounds.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.caret_locus = self.caret_locus.min(self.tail());
	}

	pub fn locus(&self) -> CharIdx {
		self.caret_locus
	}

	/// Moves the caret, clamping into `[head, tail]`.
	pub fn set_locus(&mut self, locus: isize) {
		self.caret_locus = usize::try_from(locus).unwrap_or(0).min(self.tail());
	}

	/// Moves the caret by `delta` characters, clamping into `[head, tail]`.
	pub fn shift_locus(&mut self, delta: isize) {
		let target = self.caret_locus.saturating_add_signed(delta);
		self.caret_locus = target.min(self.tail());
	}

	/// Sets text and caret together.
	pub fn assign(&mut self, text: impl Into<String>, locus: CharIdx) {
		self.text = text.into();
		self.caret_locus = locus.min(self.tail());
	}

	pub fn caret(&self) -> Caret<'_> {
		Caret { context: self }
	}

	fn tail(&self) -> CharIdx {
		self.text.chars().count()
	}
}

/// Read-only view of the caret over a [`Context`].
#[derive(Debug, Clone, Copy)]
pub struct Caret<'a> {
	context: &'a Context,
}

impl<'a> Caret<'a> {
	pub fn locus(&self) -> CharIdx {
		self.context.caret_locus
	}

	/// Always zero.
	pub fn head(&self) -> CharIdx {
		0
	}

	/// Index of the first non-blank character, or the tail.
	pub fn lead(&self) -> CharIdx {
		let text = self.context.text();
		text.chars()
			.position(|c| !c.is_whitespace())
			.unwrap_or_else(|| text.chars().count())
	}

	pub fn tail(&self) -> CharIdx {
		self.context.tail()
	}

	/// Text before the caret.
	pub fn backward_text(&self) -> &'a str {
		let text = self.context.text();
		&text[..byte_offset(text, self.locus())]
	}

	/// The character under the caret, empty at the tail.
	pub fn selected_text(&self) -> &'a str {
		let text = self.context.text();
		let start = byte_offset(text, self.locus());
		let end = byte_offset(text, self.locus() + 1);
		&text[start..end]
	}

	/// Text after the character under the caret.
	pub fn forward_text(&self) -> &'a str {
		let text = self.context.text();
		&text[byte_offset(text, self.locus() + 1)..]
	}
}

/// Byte offset of character `idx`, or the text length past the end.
pub(crate) fn byte_offset(text: &str, idx: CharIdx) -> usize {
	text.char_indices().nth(idx).map_or(text.len(), |(i, _)| i)
}
