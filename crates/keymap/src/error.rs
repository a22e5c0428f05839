//! Error types for keymap rule loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building a keymap from rules.
#[derive(Debug, Error)]
pub enum KeymapError {
	/// Error parsing TOML syntax.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a rule file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A rule is structurally invalid, e.g. its `lhs` is empty.
	#[error("invalid keymap rule: {0}")]
	InvalidRule(String),
}
