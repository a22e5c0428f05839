use serde::{Deserialize, Serialize};

/// Result of a prompt phase or action. Anything but `Progress` ends the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
	Progress,
	Accept,
	Cancel,
	Error,
}

impl Status {
	pub fn is_progress(self) -> bool {
		self == Status::Progress
	}
}

/// How literal text is written at the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
	/// Insert before the character under the caret.
	#[default]
	Insert,
	/// Overwrite characters starting at the caret.
	Replace,
}

impl InsertMode {
	pub fn toggled(self) -> Self {
		match self {
			InsertMode::Insert => InsertMode::Replace,
			InsertMode::Replace => InsertMode::Insert,
		}
	}
}
