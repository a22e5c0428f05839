//! Error types for loading the binary's configuration.

use std::path::PathBuf;

use prompter_keymap::KeymapError;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration or history file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error writing the history file.
	#[error("I/O error writing {path}: {error}")]
	Write {
		/// Path to the file that failed to write.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A keymap rule in the configuration is invalid.
	#[error(transparent)]
	Keymap(#[from] KeymapError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
