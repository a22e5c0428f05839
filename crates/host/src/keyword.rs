//! Character classification from the host's `'iskeyword'` option.
//!
//! The option is a comma-separated list of parts:
//!
//! ```text
//! part  = ["^"] item ["-" item] | "@" | "@-@"
//! item  = decimal code | single character
//! ```
//!
//! `@` stands for every alphabetic character below 256, `@-@` for the `@`
//! character itself and a leading `^` excludes instead of includes. Only
//! codes below 256 are governed by the option.

use tracing::warn;

/// Vim's default `'iskeyword'`.
pub const DEFAULT_ISKEYWORD: &str = "@,48-57,_,192-255";

/// Class of a character for word motions and deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
	/// Whitespace.
	Blank,
	/// A keyword character.
	Keyword,
	/// Any other single-byte, non-blank character.
	Punct,
	/// A non-blank character at or above U+0100.
	Wide,
}

/// Parsed `'iskeyword'` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClass {
	table: [bool; 256],
}

impl Default for KeywordClass {
	fn default() -> Self {
		Self::parse(DEFAULT_ISKEYWORD)
	}
}

impl KeywordClass {
	/// Parses an `'iskeyword'` value. Unparsable parts are skipped.
	pub fn parse(option: &str) -> Self {
		let mut table = [false; 256];
		for part in split_parts(option) {
			let (exclude, body) = match part.strip_prefix('^') {
				Some(rest) if !rest.is_empty() => (true, rest),
				_ => (false, part),
			};
			let Some((lo, hi, alpha_only)) = parse_part(body) else {
				warn!(part, "ignoring unparsable iskeyword part");
				continue;
			};
			for code in lo..=hi.min(255) {
				let alpha = char::from_u32(code).is_some_and(char::is_alphabetic);
				if !alpha_only || alpha {
					table[code as usize] = !exclude;
				}
			}
		}
		Self { table }
	}

	/// Returns true when `c` is a keyword character.
	pub fn is_keyword(&self, c: char) -> bool {
		match u32::from(c) {
			code @ 0..=255 => self.table[code as usize],
			_ => !c.is_whitespace(),
		}
	}

	/// Classifies `c`.
	pub fn classify(&self, c: char) -> CharClass {
		if c.is_whitespace() {
			CharClass::Blank
		} else if u32::from(c) >= 0x100 {
			CharClass::Wide
		} else if self.is_keyword(c) {
			CharClass::Keyword
		} else {
			CharClass::Punct
		}
	}
}

/// Splits on commas, treating a comma right after the start or another
/// separator as a literal part (`",,"` includes `,`).
fn split_parts(option: &str) -> impl Iterator<Item = &str> {
	let mut rest = option;
	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}
		let end = if rest.starts_with(',') {
			1
		} else {
			rest.find(',').unwrap_or(rest.len())
		};
		let part = &rest[..end];
		rest = rest[end..].strip_prefix(',').unwrap_or(&rest[end..]);
		Some(part)
	})
}

/// Returns the inclusive code range of one part and whether only alphabetic
/// characters in it count.
fn parse_part(part: &str) -> Option<(u32, u32, bool)> {
	match part {
		"@" => return Some((0, 255, true)),
		"@-@" => return Some((64, 64, false)),
		_ => {}
	}
	if let Some(code) = parse_item(part) {
		return Some((code, code, false));
	}
	let (lo, hi) = part.split_once('-')?;
	let (lo, hi) = (parse_item(lo)?, parse_item(hi)?);
	(lo <= hi).then_some((lo, hi, false))
}

fn parse_item(item: &str) -> Option<u32> {
	if !item.is_empty() && item.bytes().all(|b| b.is_ascii_digit()) {
		return item.parse().ok();
	}
	let mut chars = item.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Some(u32::from(c)),
		_ => None,
	}
}
