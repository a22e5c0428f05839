//! Ordered sequences of keys.

use std::fmt;

use crate::key::Key;
use crate::leader::Leaders;

#[cfg(test)]
mod tests;
mod tokenizer;

use tokenizer::Tokenizer;

/// An immutable, ordered sequence of [`Key`]s matched as one unit.
///
/// Ordering is lexicographic over the keys, so every keystroke sorts right
/// before the keystrokes it prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keystroke(Vec<Key>);

impl Keystroke {
	/// The empty keystroke. It is a prefix of every keystroke.
	pub const fn empty() -> Self {
		Self(Vec::new())
	}

	/// Parses a key expression such as `<C-A>x<prompt:accept>`.
	pub fn parse(expr: &str) -> Self {
		Self::parse_with(expr, &Leaders::default())
	}

	/// Parses a key expression, expanding `<Leader>` from `leaders`.
	pub fn parse_with(expr: &str, leaders: &Leaders) -> Self {
		Self::parse_bytes(expr.as_bytes(), leaders)
	}

	/// Parses a key expression given as raw bytes.
	pub fn parse_bytes(expr: &[u8], leaders: &Leaders) -> Self {
		Tokenizer::new(expr)
			.map(|token| Key::parse_bytes(token, leaders))
			.collect()
	}

	/// Wraps already parsed keys.
	pub fn from_keys(keys: Vec<Key>) -> Self {
		Self(keys)
	}

	pub fn keys(&self) -> &[Key] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true when `prefix` is a leading run of this keystroke.
	///
	/// This is a prefix test, not a substring test.
	pub fn starts_with(&self, prefix: &Keystroke) -> bool {
		self.0.starts_with(&prefix.0)
	}

	/// Returns a new keystroke with `key` appended.
	pub fn appended(&self, key: Key) -> Self {
		let mut keys = self.0.clone();
		keys.push(key);
		Self(keys)
	}

	/// Canonical notation of every key, concatenated.
	pub fn represent(&self) -> String {
		self.0.iter().map(Key::represent).collect()
	}

	/// Concatenated printable text of every key.
	///
	/// Action strings like `<prompt:accept>` survive parsing as literal keys,
	/// so matching happens on this form.
	pub fn text(&self) -> String {
		self.0.iter().map(Key::text).collect()
	}
}

impl fmt::Display for Keystroke {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for key in &self.0 {
			f.write_str(key.text())?;
		}
		Ok(())
	}
}

impl FromIterator<Key> for Keystroke {
	fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl From<Key> for Keystroke {
	fn from(key: Key) -> Self {
		Self(vec![key])
	}
}

impl From<&str> for Keystroke {
	fn from(expr: &str) -> Self {
		Self::parse(expr)
	}
}

impl<'a> IntoIterator for &'a Keystroke {
	type Item = &'a Key;
	type IntoIter = std::slice::Iter<'a, Key>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
