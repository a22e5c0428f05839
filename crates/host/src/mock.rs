//! Scripted in-memory host for tests.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use prompter_primitives::{Keystroke, Leaders};

use crate::capabilities::{
	DigraphSource, EchoAccess, HistoryAccess, InputState, KeyInput, OptionAccess, RegisterAccess,
};
use crate::echo::EchoChunk;
use crate::error::HostError;
use crate::input::{INTERRUPT, RawKey};
use crate::keyword::DEFAULT_ISKEYWORD;

/// One scripted answer to [`KeyInput::read_key`].
#[derive(Debug)]
pub enum Scripted {
	Key(RawKey),
	/// No key before the timeout.
	Stall,
	Fail(HostError),
}

/// A host whose input is a queue of scripted keys.
///
/// Reading past the end of the script fails with a runtime error so a test
/// never blocks.
#[derive(Debug)]
pub struct MockHost {
	pub script: VecDeque<Scripted>,
	pub history: HashMap<String, Vec<String>>,
	pub registers: HashMap<char, String>,
	pub iskeyword: String,
	pub leaders: Leaders,
	pub timeout: Option<Duration>,
	pub digraphs: String,
	/// Every `echo` call, in order.
	pub echoed: Vec<Vec<EchoChunk>>,
	pub errors: Vec<String>,
	/// Clearing the command line (`echo` with no chunks) fails.
	pub failing_clear: bool,
	/// `echo_error` fails.
	pub failing_error_echo: bool,
	pub saved: usize,
	pub restored: usize,
}

impl Default for MockHost {
	fn default() -> Self {
		Self {
			script: VecDeque::new(),
			history: HashMap::new(),
			registers: HashMap::new(),
			iskeyword: DEFAULT_ISKEYWORD.to_string(),
			leaders: Leaders::default(),
			timeout: Some(Duration::from_millis(1000)),
			digraphs: String::new(),
			echoed: Vec::new(),
			errors: Vec::new(),
			failing_clear: false,
			failing_error_echo: false,
			saved: 0,
			restored: 0,
		}
	}
}

impl MockHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues every key of a key expression such as `ab<C-A><prompt:accept>`.
	pub fn keys(mut self, expr: &str) -> Self {
		self.push_keys(expr);
		self
	}

	pub fn push_keys(&mut self, expr: &str) {
		let keys = Keystroke::parse_with(expr, &self.leaders);
		self.script
			.extend(keys.keys().iter().map(|k| Scripted::Key(RawKey::from(k))));
	}

	/// Queues a timeout.
	pub fn stall(mut self) -> Self {
		self.script.push_back(Scripted::Stall);
		self
	}

	/// Queues Ctrl-C.
	pub fn interrupt(mut self) -> Self {
		self.script.push_back(Scripted::Key(RawKey::Code(INTERRUPT)));
		self
	}

	/// Queues a host failure.
	pub fn fail(mut self, error: HostError) -> Self {
		self.script.push_back(Scripted::Fail(error));
		self
	}

	pub fn with_history(mut self, kind: &str, entries: &[&str]) -> Self {
		self.history
			.insert(kind.to_string(), entries.iter().map(|s| s.to_string()).collect());
		self
	}

	pub fn with_register(mut self, name: char, value: &str) -> Self {
		self.registers.insert(name, value.to_string());
		self
	}

	pub fn with_failing_clear(mut self) -> Self {
		self.failing_clear = true;
		self
	}

	pub fn with_failing_error_echo(mut self) -> Self {
		self.failing_error_echo = true;
		self
	}

	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	/// Text of the most recent `echo`, highlight groups dropped.
	pub fn last_echo(&self) -> String {
		self.echoed
			.last()
			.map(|chunks| chunks.iter().map(|c| c.text.as_str()).collect())
			.unwrap_or_default()
	}
}

impl KeyInput for MockHost {
	fn read_key(&mut self, timeout: Option<Duration>) -> Result<Option<RawKey>, HostError> {
		match self.script.pop_front() {
			Some(Scripted::Key(key)) => Ok(Some(key)),
			Some(Scripted::Stall) if timeout.is_some() => Ok(None),
			Some(Scripted::Stall) => self.read_key(timeout),
			Some(Scripted::Fail(error)) => Err(error),
			None => Err(HostError::Runtime("script exhausted".into())),
		}
	}
}

impl HistoryAccess for MockHost {
	fn history_add(&mut self, kind: &str, text: &str) {
		self.history
			.entry(kind.to_string())
			.or_default()
			.push(text.to_string());
	}

	fn history_len(&self, kind: &str) -> usize {
		self.history.get(kind).map_or(0, Vec::len)
	}

	fn history_get(&self, kind: &str, offset: isize) -> Option<String> {
		let entries = self.history.get(kind)?;
		let index = entries.len().checked_sub(offset.unsigned_abs())?;
		(offset < 0).then(|| entries[index].clone())
	}
}

impl RegisterAccess for MockHost {
	fn register(&self, name: char) -> Option<String> {
		self.registers.get(&name).cloned()
	}

	fn set_register(&mut self, name: char, value: &str) {
		self.registers.insert(name, value.to_string());
	}
}

impl OptionAccess for MockHost {
	fn iskeyword(&self) -> String {
		self.iskeyword.clone()
	}

	fn leaders(&self) -> Leaders {
		self.leaders.clone()
	}

	fn timeout(&self) -> Option<Duration> {
		self.timeout
	}
}

impl EchoAccess for MockHost {
	fn echo(&mut self, chunks: &[EchoChunk]) -> Result<(), HostError> {
		if chunks.is_empty() && self.failing_clear {
			return Err(HostError::Runtime("cannot clear the command line".into()));
		}
		self.echoed.push(chunks.to_vec());
		Ok(())
	}

	fn echo_error(&mut self, message: &str) -> Result<(), HostError> {
		if self.failing_error_echo {
			return Err(HostError::Runtime("cannot show the error".into()));
		}
		self.errors.extend(message.lines().map(str::to_string));
		self.echoed.push(
			message
				.lines()
				.map(|line| EchoChunk::new("ErrorMsg", format!("{line}\n")))
				.collect(),
		);
		Ok(())
	}
}

impl InputState for MockHost {
	fn save_input(&mut self) {
		self.saved += 1;
	}

	fn restore_input(&mut self) {
		self.restored += 1;
	}
}

impl DigraphSource for MockHost {
	fn digraph_listing(&self) -> Result<String, HostError> {
		Ok(self.digraphs.clone())
	}
}
