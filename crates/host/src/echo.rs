//! Highlighted command-line segments.

use std::borrow::Cow;

/// One `(highlight group, text)` segment passed to [`EchoAccess::echo`].
///
/// [`EchoAccess::echo`]: crate::EchoAccess::echo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoChunk {
	/// Highlight group name, `"None"` for plain text.
	pub group: Cow<'static, str>,
	pub text: String,
}

impl EchoChunk {
	pub fn new(group: impl Into<Cow<'static, str>>, text: impl Into<String>) -> Self {
		Self {
			group: group.into(),
			text: text.into(),
		}
	}

	/// A segment without highlighting.
	pub fn plain(text: impl Into<String>) -> Self {
		Self::new("None", text)
	}
}

/// Renders control characters the way the host's command line shows them.
///
/// `\x07` becomes `^G`, `\r` becomes `^M`, DEL becomes `^?`.
pub fn caret_notation(text: &str) -> Cow<'_, str> {
	if !text.chars().any(|c| c.is_ascii_control()) {
		return Cow::Borrowed(text);
	}
	let mut out = String::with_capacity(text.len() + 4);
	for c in text.chars() {
		match c {
			'\x7f' => out.push_str("^?"),
			c if c.is_ascii_control() => {
				out.push('^');
				out.push(char::from(c as u8 + 0x40));
			}
			c => out.push(c),
		}
	}
	Cow::Owned(out)
}
