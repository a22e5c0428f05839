//! Errors surfaced by host adapters.

use thiserror::Error;

/// Failures reported by a host binding.
#[derive(Debug, Error)]
pub enum HostError {
	/// The user pressed Ctrl-C while the host was waiting for input.
	#[error("keyboard interrupt")]
	Interrupted,

	/// The host rejected a call. The message may span several lines.
	#[error("{0}")]
	Runtime(String),

	/// Terminal or file I/O failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
