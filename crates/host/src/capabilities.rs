//! Fine-grained capability traits for host operations.
//!
//! - [`KeyInput`] - read one key, with a no-input sentinel for timeouts
//! - [`HistoryAccess`] - the host's persisted input history
//! - [`RegisterAccess`] - named registers
//! - [`OptionAccess`] - `iskeyword`, leaders and mapping timeouts
//! - [`EchoAccess`] - draw highlighted segments on the command line
//! - [`InputState`] - save/restore pending host input around a session
//! - [`DigraphSource`] - the raw digraph listing
//!
//! [`Host`] bundles all of them and is implemented for every type that
//! provides each capability.

use std::time::Duration;

use prompter_primitives::Leaders;

use crate::echo::EchoChunk;
use crate::error::HostError;
use crate::input::RawKey;
use crate::keyword::DEFAULT_ISKEYWORD;

/// Reads raw keys from the host.
pub trait KeyInput {
	/// Waits up to `timeout` for a key, or indefinitely when `timeout` is `None`.
	///
	/// `Ok(None)` means no key arrived in time. Implementations may report
	/// Ctrl-C either as [`HostError::Interrupted`] or as the raw code `3`.
	fn read_key(&mut self, timeout: Option<Duration>) -> Result<Option<RawKey>, HostError>;
}

/// Persisted input history, addressed like `histget()`.
pub trait HistoryAccess {
	/// Appends `text` to the `kind` history.
	fn history_add(&mut self, kind: &str, text: &str);
	/// Number of entries in the `kind` history.
	fn history_len(&self, kind: &str) -> usize;
	/// Entry at a negative offset: `-1` is the newest entry.
	fn history_get(&self, kind: &str, offset: isize) -> Option<String>;
}

/// Named registers.
pub trait RegisterAccess {
	fn register(&self, name: char) -> Option<String>;
	fn set_register(&mut self, name: char, value: &str);

	/// Name of the unnamed register (`v:register`).
	fn default_register(&self) -> char {
		'"'
	}
}

/// Host options the prompt reads.
pub trait OptionAccess {
	/// The keyword character definition (`'iskeyword'`).
	fn iskeyword(&self) -> String {
		DEFAULT_ISKEYWORD.to_string()
	}

	/// The configured `<Leader>` and `<LocalLeader>` strings.
	fn leaders(&self) -> Leaders {
		Leaders::default()
	}

	/// How long an ambiguous mapping prefix waits for more keys.
	///
	/// `None` waits forever (`'notimeout'`).
	fn timeout(&self) -> Option<Duration> {
		Some(Duration::from_millis(1000))
	}
}

/// Command-line drawing.
pub trait EchoAccess {
	/// Clears the command line and draws `chunks` in order.
	fn echo(&mut self, chunks: &[EchoChunk]) -> Result<(), HostError>;

	/// Shows an error message, one line per message line.
	fn echo_error(&mut self, message: &str) -> Result<(), HostError> {
		let chunks: Vec<_> = message
			.lines()
			.map(|line| EchoChunk::new("ErrorMsg", format!("{line}\n")))
			.collect();
		self.echo(&chunks)
	}
}

/// Pending host input, saved for the duration of a prompt session.
pub trait InputState {
	fn save_input(&mut self);
	fn restore_input(&mut self);
}

/// Source of the host's digraph table.
pub trait DigraphSource {
	/// Raw `:digraphs` listing: `char1char2 glyph code` triples.
	fn digraph_listing(&self) -> Result<String, HostError>;
}

/// Everything the prompt needs from a host.
pub trait Host:
	KeyInput + HistoryAccess + RegisterAccess + OptionAccess + EchoAccess + InputState + DigraphSource
{
}

impl<T> Host for T where
	T: KeyInput
		+ HistoryAccess
		+ RegisterAccess
		+ OptionAccess
		+ EchoAccess
		+ InputState
		+ DigraphSource
{
}
