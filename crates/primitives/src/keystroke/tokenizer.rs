//! Splits a key expression into per-key tokens.
//!
//! ```text
//! token    = bracket | modified | special | char
//! bracket  = "<" (any byte except "<" ">")+ ">"
//! modified = 0x80 0xFC byte token
//! special  = 0x80 byte byte
//! char     = one UTF-8 scalar, or one byte when the input is not valid UTF-8
//! ```

use crate::key::{MARKER, MODIFIER};

/// Cursor over the raw bytes of a key expression.
pub(crate) struct Tokenizer<'a> {
	input: &'a [u8],
	position: usize,
}

impl<'a> Tokenizer<'a> {
	pub(crate) fn new(input: &'a [u8]) -> Self {
		Self { input, position: 0 }
	}

	fn rest(&self) -> &'a [u8] {
		&self.input[self.position..]
	}

	fn peek_at(&self, n: usize) -> Option<u8> {
		self.rest().get(n).copied()
	}

	fn is_end(&self) -> bool {
		self.position >= self.input.len()
	}

	/// Consumes up to `len` bytes and returns them.
	fn take(&mut self, len: usize) -> &'a [u8] {
		let rest = self.rest();
		let len = len.min(rest.len());
		self.position += len;
		&rest[..len]
	}

	/// Length of the token starting at the cursor, or zero at end of input.
	fn token_len(&self) -> usize {
		let rest = self.rest();
		match rest {
			[] => 0,
			[b'<', ..] => self.bracket_len().unwrap_or(1),
			[MARKER, MODIFIER, _, ..] => 3 + Tokenizer::new(&rest[3..]).token_len(),
			[MARKER, ..] => rest.len().min(3),
			_ => utf8_len(rest),
		}
	}

	fn bracket_len(&self) -> Option<usize> {
		let mut n = 1;
		while let Some(b) = self.peek_at(n) {
			match b {
				b'>' if n > 1 => return Some(n + 1),
				b'>' | b'<' => return None,
				_ => n += 1,
			}
		}
		None
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		if self.is_end() {
			return None;
		}
		let len = self.token_len();
		Some(self.take(len))
	}
}

/// Byte length of the leading UTF-8 scalar, or 1 when it is not valid UTF-8.
fn utf8_len(bytes: &[u8]) -> usize {
	let width = match bytes[0] {
		0x00..=0x7F => 1,
		0xC0..=0xDF => 2,
		0xE0..=0xEF => 3,
		0xF0..=0xF7 => 4,
		_ => return 1,
	};
	match bytes.get(..width) {
		Some(head) if std::str::from_utf8(head).is_ok() => width,
		_ => 1,
	}
}
