//! Per-prompt settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::status::InsertMode;

/// Appearance and behaviour of one prompt.
///
/// Unset timeout fields defer to the host's `'timeout'`/`'timeoutlen'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
	/// Text drawn before the editable line.
	pub prefix: String,
	pub highlight_prefix: String,
	pub highlight_text: String,
	pub highlight_caret: String,
	/// Mode the prompt starts in.
	pub insert_mode: InsertMode,
	/// History list the prompt browses and appends to.
	pub history_kind: String,
	/// `false` waits forever on an ambiguous mapping prefix.
	pub timeout: Option<bool>,
	/// Milliseconds to wait on an ambiguous mapping prefix.
	pub timeoutlen: Option<u64>,
}

impl Default for PromptConfig {
	fn default() -> Self {
		Self {
			prefix: String::new(),
			highlight_prefix: "Question".to_string(),
			highlight_text: "None".to_string(),
			highlight_caret: "IncSearch".to_string(),
			insert_mode: InsertMode::Insert,
			history_kind: "input".to_string(),
			timeout: None,
			timeoutlen: None,
		}
	}
}

impl PromptConfig {
	/// Mapping timeout given the host's own setting.
	pub fn effective_timeout(&self, host: Option<Duration>) -> Option<Duration> {
		match (self.timeout, self.timeoutlen) {
			(Some(false), _) => None,
			(_, Some(ms)) => Some(Duration::from_millis(ms)),
			(Some(true), None) => host.or(Some(Duration::from_millis(1000))),
			(None, None) => host,
		}
	}
}
