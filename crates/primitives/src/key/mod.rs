//! Key types and textual key notation.
//!
//! A [`Key`] is one physical keypress in the host editor's encoding. Plain
//! characters carry their code point; special keys (arrows, function keys,
//! modified keys) carry an opaque byte sequence starting with [`MARKER`].
//!
//! # Notation
//!
//! ```text
//! expr      = char | special | "<" name ">"
//! name      = table-name | "C-S-" key | "S-C-" key | "C-" key | "M-" key | "A-" key
//!           | "Leader" | "LocalLeader"
//! ```
//!
//! Names are case-insensitive. Anything that does not resolve is kept as
//! literal text, so `<foo>` is a key whose text is `"<foo>"`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::leader::Leaders;

mod table;
#[cfg(test)]
mod tests;

/// First byte of every opaque special-key sequence.
pub const MARKER: u8 = 0x80;
/// Second byte of a modifier prefix (`KS_MODIFIER`).
pub(crate) const MODIFIER: u8 = 0xFC;
/// Prefix for Ctrl-modified keys.
pub const CTRL_KEY: &[u8] = b"\x80\xfc\x04";
/// Prefix for Meta/Alt-modified keys.
pub const META_KEY: &[u8] = b"\x80\xfc\x08";
/// Prefix for Ctrl+Shift-modified keys.
pub const CTRL_SHIFT_KEY: &[u8] = b"\x80\xfc\x06";

/// Letters whose Ctrl variant is a plain control code.
const CTRL_CHARS: &[u8] = b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_?";

/// Raw code of a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
	/// A plain character code.
	Char(u32),
	/// An opaque special-key sequence, or literal text that did not resolve.
	Bytes(SmallVec<[u8; 8]>),
}

impl KeyCode {
	/// Returns true for opaque special-key sequences.
	pub fn is_special(&self) -> bool {
		matches!(self, KeyCode::Bytes(b) if b.first() == Some(&MARKER))
	}

	/// Encodes the code back into bytes.
	pub fn to_bytes(&self) -> SmallVec<[u8; 8]> {
		match self {
			KeyCode::Char(c) => match char::from_u32(*c) {
				Some(ch) => {
					let mut buf = [0u8; 4];
					SmallVec::from_slice(ch.encode_utf8(&mut buf).as_bytes())
				}
				None => SmallVec::new(),
			},
			KeyCode::Bytes(b) => b.clone(),
		}
	}
}

/// One keypress: its code plus the printable text it inserts.
///
/// Equality, hashing and ordering consider only the code.
#[derive(Debug, Clone)]
pub struct Key {
	code: KeyCode,
	text: String,
}

impl Key {
	/// Parses a key expression using the default leaders.
	pub fn parse(expr: &str) -> Self {
		Self::parse_with(expr, &Leaders::default())
	}

	/// Parses a key expression, expanding `<Leader>` from `leaders`.
	pub fn parse_with(expr: &str, leaders: &Leaders) -> Self {
		Self::parse_bytes(expr.as_bytes(), leaders)
	}

	/// Parses a key expression given as raw bytes.
	pub fn parse_bytes(expr: &[u8], leaders: &Leaders) -> Self {
		Self::from_code(resolve(expr, leaders))
	}

	/// Creates a key from a character.
	pub fn from_char(ch: char) -> Self {
		Self::from_code(KeyCode::Char(ch as u32))
	}

	/// Creates a key from an already resolved code.
	pub fn from_code(code: KeyCode) -> Self {
		let text = printable(&code);
		Self { code, text }
	}

	/// Returns the key code.
	pub fn code(&self) -> &KeyCode {
		&self.code
	}

	/// Returns the printable text, empty for special keys.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Returns true for opaque special keys.
	pub fn is_special(&self) -> bool {
		self.code.is_special()
	}

	/// Returns the plain character, if the key is one.
	pub fn as_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) => char::from_u32(c),
			KeyCode::Bytes(_) => None,
		}
	}

	/// Returns the canonical notation of this key.
	pub fn represent(&self) -> String {
		represent(&self.code)
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		self.code == other.code
	}
}

impl Eq for Key {}

impl Hash for Key {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.code.hash(state);
	}
}

impl PartialOrd for Key {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Key {
	fn cmp(&self, other: &Self) -> Ordering {
		self.code.cmp(&other.code)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

impl From<char> for Key {
	fn from(ch: char) -> Self {
		Self::from_char(ch)
	}
}

/// Returns the canonical notation of a code.
///
/// Named special keys become `<NAME>` (uppercase), modified keys become
/// `<C-x>`, `<M-x>` or `<C-S-x>`, and plain characters are returned as-is.
pub fn represent(code: &KeyCode) -> String {
	if let Some(name) = table::name_of(code) {
		return format!("<{name}>");
	}
	match code {
		KeyCode::Char(_) => printable(code),
		KeyCode::Bytes(bytes) => {
			if let Some((prefix, rest)) = split_modifier(bytes) {
				let inner = resolve_code_bytes(rest);
				let inner = match table::name_of(&inner) {
					Some(name) => name.to_string(),
					None => printable(&inner),
				};
				return format!("<{prefix}{inner}>");
			}
			if bytes.first() == Some(&MARKER) {
				format!("<{}>", bytes.escape_ascii())
			} else {
				String::from_utf8_lossy(bytes).into_owned()
			}
		}
	}
}

fn split_modifier(bytes: &[u8]) -> Option<(&'static str, &[u8])> {
	[(CTRL_SHIFT_KEY, "C-S-"), (CTRL_KEY, "C-"), (META_KEY, "M-")]
		.into_iter()
		.find_map(|(marker, prefix)| bytes.strip_prefix(marker).map(|rest| (prefix, rest)))
		.filter(|(_, rest)| !rest.is_empty())
}

fn printable(code: &KeyCode) -> String {
	match code {
		KeyCode::Char(c) => char::from_u32(*c).map(String::from).unwrap_or_default(),
		KeyCode::Bytes(b) if b.first() == Some(&MARKER) => String::new(),
		KeyCode::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
	}
}

/// Resolves bytes that are already encoded (a character or a special sequence).
fn resolve_code_bytes(bytes: &[u8]) -> KeyCode {
	match single_char(bytes) {
		Some(c) => KeyCode::Char(c),
		None => KeyCode::Bytes(bytes.into()),
	}
}

/// Returns the code of `bytes` when it is exactly one character or one byte.
fn single_char(bytes: &[u8]) -> Option<u32> {
	if let [b] = bytes {
		return Some(u32::from(*b));
	}
	let s = std::str::from_utf8(bytes).ok()?;
	let mut chars = s.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Some(ch as u32),
		_ => None,
	}
}

fn resolve(expr: &[u8], leaders: &Leaders) -> KeyCode {
	if let Some(c) = single_char(expr) {
		return KeyCode::Char(c);
	}
	if expr.first() == Some(&MARKER) {
		return KeyCode::Bytes(expr.into());
	}
	if let Some(inner) = bracketed(expr)
		&& let Some(code) = resolve_name(inner, leaders)
	{
		return code;
	}
	KeyCode::Bytes(expr.into())
}

fn bracketed(expr: &[u8]) -> Option<&[u8]> {
	let inner = expr.strip_prefix(b"<")?.strip_suffix(b">")?;
	(!inner.is_empty() && !inner.contains(&b'>')).then_some(inner)
}

/// Resolves the inside of `<...>`.
fn resolve_name(name: &[u8], leaders: &Leaders) -> Option<KeyCode> {
	let upper = name.to_ascii_uppercase();
	if let Some(code) = table::lookup(&upper) {
		return Some(code);
	}
	if upper.starts_with(b"C-S-") || upper.starts_with(b"S-C-") {
		return with_prefix(CTRL_SHIFT_KEY, &name[4..], leaders);
	}
	if let Some(rest) = upper.strip_prefix(b"C-") {
		if let [b] = rest
			&& CTRL_CHARS.contains(b)
		{
			return Some(KeyCode::Char(u32::from(b & 0x1F)));
		}
		return with_prefix(CTRL_KEY, &name[2..], leaders);
	}
	if upper.starts_with(b"M-") || upper.starts_with(b"A-") {
		return with_prefix(META_KEY, &name[2..], leaders);
	}
	match upper.as_slice() {
		b"LEADER" => Some(resolve(leaders.leader.as_bytes(), &Leaders::default())),
		b"LOCALLEADER" => Some(resolve(leaders.local_leader.as_bytes(), &Leaders::default())),
		_ => None,
	}
}

/// Resolves the key following a modifier and prepends the modifier prefix.
fn with_prefix(prefix: &[u8], rest: &[u8], leaders: &Leaders) -> Option<KeyCode> {
	let code = match single_char(rest) {
		Some(c) => KeyCode::Char(c),
		None if rest.is_empty() => return None,
		None => resolve_name(rest, leaders)?,
	};
	let mut bytes: SmallVec<[u8; 8]> = SmallVec::from_slice(prefix);
	bytes.extend_from_slice(&code.to_bytes());
	Some(KeyCode::Bytes(bytes))
}
