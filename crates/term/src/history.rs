//! Input history kept across runs.
//!
//! Only the `input` list is persisted, one entry per line, oldest first.
//! Other lists live for the duration of the process.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::config::{ConfigError, Result};

/// History list written to the history file.
pub const PERSISTED_KIND: &str = "input";

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
	lists: HashMap<String, Vec<String>>,
	limit: usize,
}

impl HistoryStore {
	pub fn new(limit: usize) -> Self {
		Self {
			lists: HashMap::new(),
			limit,
		}
	}

	/// Reads `path`; a missing file gives an empty store.
	pub fn load(path: &Path, limit: usize) -> Result<Self> {
		let mut store = Self::new(limit);
		let source = match std::fs::read_to_string(path) {
			Ok(source) => source,
			Err(error) if error.kind() == ErrorKind::NotFound => return Ok(store),
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		for line in source.lines().filter(|line| !line.is_empty()) {
			store.add(PERSISTED_KIND, line);
		}
		debug!(path = %path.display(), entries = store.len(PERSISTED_KIND), "loaded history");
		Ok(store)
	}

	pub fn save(&self, path: &Path) -> Result<()> {
		let write_error = |error| ConfigError::Write {
			path: path.to_path_buf(),
			error,
		};
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent).map_err(write_error)?;
		}
		let mut out = String::new();
		for entry in self.lists.get(PERSISTED_KIND).into_iter().flatten() {
			out.push_str(entry);
			out.push('\n');
		}
		std::fs::write(path, out).map_err(write_error)?;
		debug!(path = %path.display(), "saved history");
		Ok(())
	}

	/// Appends `text` as the newest entry, moving an equal older entry up and
	/// dropping the oldest ones past the limit.
	pub fn add(&mut self, kind: &str, text: &str) {
		if text.contains('\n') {
			debug!(kind, "multi-line entry not remembered");
			return;
		}
		let list = self.lists.entry(kind.to_string()).or_default();
		list.retain(|entry| entry != text);
		list.push(text.to_string());
		let excess = list.len().saturating_sub(self.limit);
		list.drain(..excess);
	}

	pub fn len(&self, kind: &str) -> usize {
		self.lists.get(kind).map_or(0, Vec::len)
	}

	/// Entry `offset` steps back from the newest (`-1`).
	pub fn get(&self, kind: &str, offset: isize) -> Option<String> {
		if offset >= 0 {
			return None;
		}
		let list = self.lists.get(kind)?;
		let index = list.len().checked_sub(offset.unsigned_abs())?;
		list.get(index).cloned()
	}
}
