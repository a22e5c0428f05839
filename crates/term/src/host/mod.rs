//! The terminal as a prompt host.
//!
//! Keys come from crossterm events, the command line is the terminal's
//! current line, and registers and history live in memory. Raw mode is on
//! between `save_input` and `restore_input`.

pub mod keys;
pub mod render;

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::terminal;
use prompter_host::{
	DigraphSource, EchoAccess, EchoChunk, HistoryAccess, HostError, InputState, KeyInput, OptionAccess, RawKey,
	RegisterAccess,
};
use prompter_primitives::Leaders;
use tracing::{debug, warn};

use crate::config::HostSettings;
use crate::digraphs;
use crate::history::HistoryStore;

/// Columns assumed when the terminal size is unknown.
const FALLBACK_WIDTH: usize = 80;

pub struct TermHost<W: Write> {
	out: W,
	settings: HostSettings,
	history: HistoryStore,
	registers: HashMap<char, String>,
	raw_mode: bool,
}

impl TermHost<io::Stderr> {
	/// A host drawing on stderr, leaving stdout for the accepted text.
	pub fn stderr(settings: HostSettings, history: HistoryStore) -> Self {
		Self::new(io::stderr(), settings, history)
	}
}

impl<W: Write> TermHost<W> {
	pub fn new(out: W, settings: HostSettings, history: HistoryStore) -> Self {
		Self {
			out,
			settings,
			history,
			registers: HashMap::new(),
			raw_mode: false,
		}
	}

	pub fn history(&self) -> &HistoryStore {
		&self.history
	}

	fn width() -> usize {
		terminal::size().map_or(FALLBACK_WIDTH, |(columns, _)| usize::from(columns))
	}

	fn leave_raw_mode(&mut self) {
		if !self.raw_mode {
			return;
		}
		if let Err(err) = terminal::disable_raw_mode() {
			warn!(%err, "failed to leave raw mode");
		}
		self.raw_mode = false;
	}
}

impl<W: Write> Drop for TermHost<W> {
	fn drop(&mut self) {
		self.leave_raw_mode();
	}
}

impl<W: Write> KeyInput for TermHost<W> {
	fn read_key(&mut self, timeout: Option<Duration>) -> Result<Option<RawKey>, HostError> {
		Ok(keys::read(timeout)?)
	}
}

impl<W: Write> HistoryAccess for TermHost<W> {
	fn history_add(&mut self, kind: &str, text: &str) {
		self.history.add(kind, text);
	}

	fn history_len(&self, kind: &str) -> usize {
		self.history.len(kind)
	}

	fn history_get(&self, kind: &str, offset: isize) -> Option<String> {
		self.history.get(kind, offset)
	}
}

impl<W: Write> RegisterAccess for TermHost<W> {
	fn register(&self, name: char) -> Option<String> {
		self.registers.get(&name).cloned()
	}

	fn set_register(&mut self, name: char, value: &str) {
		self.registers.insert(name, value.to_string());
	}
}

impl<W: Write> OptionAccess for TermHost<W> {
	fn iskeyword(&self) -> String {
		self.settings.iskeyword.clone()
	}

	fn leaders(&self) -> Leaders {
		self.settings.leaders()
	}

	fn timeout(&self) -> Option<Duration> {
		self.settings.timeout()
	}
}

impl<W: Write> EchoAccess for TermHost<W> {
	fn echo(&mut self, chunks: &[EchoChunk]) -> Result<(), HostError> {
		Ok(render::draw_line(&mut self.out, chunks, Self::width())?)
	}

	fn echo_error(&mut self, message: &str) -> Result<(), HostError> {
		Ok(render::draw_error(&mut self.out, message)?)
	}
}

impl<W: Write> InputState for TermHost<W> {
	fn save_input(&mut self) {
		match terminal::enable_raw_mode() {
			Ok(()) => {
				debug!("raw mode on");
				self.raw_mode = true;
			}
			Err(err) => warn!(%err, "failed to enter raw mode"),
		}
	}

	fn restore_input(&mut self) {
		self.leave_raw_mode();
		debug!("raw mode off");
	}
}

impl<W: Write> DigraphSource for TermHost<W> {
	fn digraph_listing(&self) -> Result<String, HostError> {
		Ok(digraphs::LISTING.to_string())
	}
}
