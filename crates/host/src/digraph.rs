//! Digraph lookup built from the host's `:digraphs` listing.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::capabilities::DigraphSource;
use crate::error::HostError;

/// `char1char2 glyph code` triple. The glyph follows a single space and may be
/// in caret notation, or itself a space (`SP     32`).
static ENTRY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(\S{2}) (?:\S+|\s)\s+(\d+)").expect("digraph entry pattern is valid"));

/// Digraph table, parsed on first lookup and cached for its lifetime.
#[derive(Debug, Default)]
pub struct DigraphTable {
	entries: OnceCell<HashMap<(char, char), char>>,
}

impl DigraphTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table from an already available listing.
	pub fn from_listing(listing: &str) -> Self {
		let table = Self::new();
		let _ = table.entries.set(parse(listing));
		table
	}

	/// Composes `c1` and `c2`.
	///
	/// The reversed pair is tried as well. Unknown pairs yield `c2`.
	pub fn find(&self, source: &dyn DigraphSource, c1: char, c2: char) -> Result<char, HostError> {
		let entries = match self.entries.get() {
			Some(entries) => entries,
			None => {
				let listing = source.digraph_listing()?;
				self.entries.get_or_init(|| parse(&listing))
			}
		};
		Ok(entries
			.get(&(c1, c2))
			.or_else(|| entries.get(&(c2, c1)))
			.copied()
			.unwrap_or(c2))
	}
}

fn parse(listing: &str) -> HashMap<(char, char), char> {
	let entries: HashMap<_, _> = ENTRY
		.captures_iter(listing)
		.filter_map(|caps| {
			let mut pair = caps[1].chars();
			let (c1, c2) = (pair.next()?, pair.next()?);
			let code = char::from_u32(caps[2].parse().ok()?)?;
			Some(((c1, c2), code))
		})
		.collect();
	debug!(count = entries.len(), "parsed digraph table");
	entries
}
