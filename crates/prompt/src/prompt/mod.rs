//! The read, resolve, dispatch and redraw loop.
//!
//! ```text
//! INIT -> UPDATE -> { REDRAW -> KEYPRESS -> UPDATE }* -> TERM
//! ```
//!
//! Each phase returns a [`Status`]; anything but [`Status::Progress`] leaves
//! the loop. Ctrl-C ends the session as [`Status::Cancel`], any other host
//! failure is shown to the user and ends it as [`Status::Error`].

use std::sync::Arc;

use prompter_host::{DigraphTable, EchoChunk, Host, HostError, KeywordClass, caret_notation, getchar};
use prompter_keymap::{Keymap, RuleSpec};
use prompter_primitives::{Key, Keystroke, Leaders};
use tracing::{debug, trace, warn};

use crate::action::{Action, parse_action_keystroke};
use crate::config::PromptConfig;
use crate::context::{Caret, Context, Snapshot, byte_offset};
use crate::error::PromptError;
use crate::history::History;
use crate::status::{InsertMode, Status};

mod builder;
mod hooks;
#[cfg(test)]
mod tests;

pub use builder::PromptBuilder;
pub use hooks::{DefaultHooks, PromptHooks};

/// One interactive prompt session bound to a host.
pub struct Prompt<'h> {
	host: &'h mut dyn Host,
	context: Context,
	history: History,
	keymap: Arc<Keymap>,
	action: Arc<Action>,
	config: PromptConfig,
	mode: InsertMode,
	keyword: KeywordClass,
	leaders: Leaders,
	digraphs: DigraphTable,
	initial_text: String,
}

impl<'h> Prompt<'h> {
	/// A prompt with the default keymap and actions.
	pub fn new(host: &'h mut dyn Host) -> Self {
		PromptBuilder::new().build(host)
	}

	pub fn builder() -> PromptBuilder {
		PromptBuilder::new()
	}

	/// Runs the session with the built-in hooks.
	pub fn start(&mut self) -> Result<Status, PromptError> {
		self.start_with(&mut DefaultHooks)
	}

	/// Runs the session, calling `hooks` at each phase.
	///
	/// Action errors are returned to the caller after the host input has
	/// been restored.
	pub fn start_with(&mut self, hooks: &mut dyn PromptHooks) -> Result<Status, PromptError> {
		let status = hooks.on_init(self)?;
		let status = match self.run(hooks, status) {
			Ok(status) => status,
			Err(PromptError::Host(HostError::Interrupted)) => {
				debug!("interrupted");
				Status::Cancel
			}
			Err(PromptError::Host(err)) => {
				debug!(%err, "host error");
				if let Err(echo_err) = self.host.echo_error(&err.to_string()) {
					warn!(%echo_err, "cannot show host error");
				}
				Status::Error
			}
			Err(err) => {
				self.host.restore_input();
				return Err(err);
			}
		};
		hooks.on_term(self, status)
	}

	fn run(&mut self, hooks: &mut dyn PromptHooks, status: Status) -> Result<Status, PromptError> {
		if !status.is_progress() {
			return Ok(status);
		}
		let mut status = hooks.on_update(self, status)?;
		let timeout = self.config.effective_timeout(self.host.timeout());
		while status.is_progress() {
			trace!("redraw");
			status = hooks.on_redraw(self)?;
			if !status.is_progress() {
				break;
			}
			let keymap = Arc::clone(&self.keymap);
			let keystroke = keymap.harvest(&mut *self.host, timeout)?;
			trace!(keystroke = %keystroke.represent(), "keypress");
			status = hooks.on_keypress(self, &keystroke)?;
			status = hooks.on_update(self, status)?;
		}
		Ok(status)
	}

	/// Saves host input, resets history browsing and seeds the initial text.
	pub fn init(&mut self) -> Status {
		self.host.save_input();
		self.history = History::new(self.config.history_kind.clone());
		self.context = Context::new(self.initial_text.clone());
		Status::Progress
	}

	/// Dispatches an action keystroke, or writes the keystroke text at the caret.
	pub fn keypress(&mut self, keystroke: &Keystroke) -> Result<Status, PromptError> {
		let text = keystroke.text();
		if let Some(action) = parse_action_keystroke(&text) {
			return self.call_action(action);
		}
		self.update_text(&text);
		Ok(Status::Progress)
	}

	/// Restores host input, records the final text in history and clears the
	/// command line. An error status leaves its message on screen.
	pub fn term(&mut self, status: Status) -> Result<Status, PromptError> {
		self.host.restore_input();
		if matches!(status, Status::Accept | Status::Cancel) && !self.context.text().is_empty() {
			self.host.history_add(&self.config.history_kind, self.context.text());
		}
		if status != Status::Error {
			self.host.echo(&[])?;
		}
		Ok(status)
	}

	/// Runs an action string such as `prompt:accept` against this prompt.
	pub fn call_action(&mut self, action: &str) -> Result<Status, PromptError> {
		let registry = Arc::clone(&self.action);
		registry.call(self, action)
	}

	/// Draws prefix, text and caret on the host command line.
	pub fn redraw(&mut self) -> Result<(), PromptError> {
		let chunks = self.chunks();
		self.host.echo(&chunks)?;
		Ok(())
	}

	fn chunks(&self) -> Vec<EchoChunk> {
		let caret = self.context.caret();
		let selected = match caret.selected_text() {
			"" => " ",
			s => s,
		};
		let text_group = self.config.highlight_text.clone();
		[
			(self.config.highlight_prefix.clone(), self.config.prefix.clone()),
			(text_group.clone(), caret_notation(caret.backward_text()).into_owned()),
			(self.config.highlight_caret.clone(), caret_notation(selected).into_owned()),
			(text_group, caret_notation(caret.forward_text()).into_owned()),
		]
		.into_iter()
		.filter(|(_, text)| !text.is_empty())
		.map(|(group, text)| EchoChunk::new(group, text))
		.collect()
	}

	/// Writes `text` at the caret according to the current [`InsertMode`].
	pub fn update_text(&mut self, text: &str) {
		match self.mode {
			InsertMode::Insert => self.insert_text(text),
			InsertMode::Replace => self.replace_text(text),
		}
	}

	/// Inserts `text` before the character under the caret.
	pub fn insert_text(&mut self, text: &str) {
		let locus = self.context.locus();
		let at = byte_offset(self.context.text(), locus);
		let mut new = self.context.text().to_string();
		new.insert_str(at, text);
		self.context.assign(new, locus + text.chars().count());
	}

	/// Overwrites as many characters as `text` has, starting at the caret.
	pub fn replace_text(&mut self, text: &str) {
		let locus = self.context.locus();
		let n = text.chars().count();
		let current = self.context.text();
		let start = byte_offset(current, locus);
		let end = byte_offset(current, locus + n);
		let new = format!("{}{}{}", &current[..start], text, &current[end..]);
		self.context.assign(new, locus + n);
	}

	/// Shows `glyph` at the caret while `read` runs, then restores the text
	/// state whether or not `read` succeeded.
	pub fn with_indicator<T>(
		&mut self,
		glyph: &str,
		read: impl FnOnce(&mut Self) -> Result<T, PromptError>,
	) -> Result<T, PromptError> {
		let snapshot = self.snapshot();
		self.insert_text(glyph);
		let result = self.redraw().and_then(|()| read(self));
		self.restore(snapshot);
		result
	}

	/// Reads one key directly from the host, bypassing the keymap.
	pub fn read_key(&mut self) -> Result<Key, PromptError> {
		loop {
			if let Some(key) = getchar(&mut *self.host, None)? {
				return Ok(key);
			}
		}
	}

	/// Reads one key and returns it as a character, `None` for special keys.
	pub fn read_char(&mut self) -> Result<Option<char>, PromptError> {
		Ok(self.read_key()?.as_char())
	}

	pub fn snapshot(&self) -> Snapshot {
		self.context.clone()
	}

	pub fn restore(&mut self, snapshot: Snapshot) {
		self.context = snapshot;
	}

	pub fn text(&self) -> &str {
		self.context.text()
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.context.set_text(text);
	}

	pub fn caret(&self) -> Caret<'_> {
		self.context.caret()
	}

	pub fn context(&self) -> &Context {
		&self.context
	}

	pub fn context_mut(&mut self) -> &mut Context {
		&mut self.context
	}

	pub fn mode(&self) -> InsertMode {
		self.mode
	}

	pub fn set_mode(&mut self, mode: InsertMode) {
		self.mode = mode;
	}

	pub fn config(&self) -> &PromptConfig {
		&self.config
	}

	pub fn keyword(&self) -> &KeywordClass {
		&self.keyword
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	/// The host, for hooks that need services beyond the prompt's own.
	pub fn host(&mut self) -> &mut dyn Host {
		&mut *self.host
	}

	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	/// The keymap, copied first if it is shared with other prompts.
	pub fn keymap_mut(&mut self) -> &mut Keymap {
		Arc::make_mut(&mut self.keymap)
	}

	/// The host's `<Leader>` and `<LocalLeader>`, read when the prompt was built.
	pub fn leaders(&self) -> &Leaders {
		&self.leaders
	}

	/// Registers a mapping rule, expanding `<Leader>` from the host's leaders.
	pub fn map(&mut self, spec: impl Into<RuleSpec>) -> Result<(), PromptError> {
		Arc::make_mut(&mut self.keymap).register_from_rule(spec, &self.leaders)?;
		Ok(())
	}

	pub fn action(&self) -> &Action {
		&self.action
	}

	/// The action registry, copied first if it is shared with other prompts.
	pub fn action_mut(&mut self) -> &mut Action {
		Arc::make_mut(&mut self.action)
	}

	pub(crate) fn history_previous(&mut self, matched: bool) -> String {
		let (text, backward) = (self.context.text(), self.context.caret().backward_text());
		if matched {
			self.history.previous_match(&*self.host, text, backward)
		} else {
			self.history.previous(&*self.host, text, backward)
		}
	}

	pub(crate) fn history_next(&mut self, matched: bool) -> String {
		let text = self.context.text();
		if matched {
			self.history.next_match(&*self.host, text)
		} else {
			self.history.next(&*self.host, text)
		}
	}

	pub(crate) fn find_digraph(&mut self, c1: char, c2: char) -> Result<char, PromptError> {
		Ok(self.digraphs.find(&*self.host, c1, c2)?)
	}
}
