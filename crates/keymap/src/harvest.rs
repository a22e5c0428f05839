//! Reading keys from the host until a keystroke resolves.

use std::time::Duration;

use prompter_host::{HostError, KeyInput, getchar};
use prompter_primitives::Keystroke;
use tracing::debug;

use crate::keymap::{Keymap, Resolution};

impl Keymap {
	/// Reads keys until the accumulated keystroke resolves.
	///
	/// The first key is awaited indefinitely. After that, each key must
	/// arrive within `timeout`; when it does not, the keys read so far are
	/// resolved with `nowait`, or returned as-is if that is still ambiguous.
	/// A missing or zero `timeout` waits forever.
	pub fn harvest(&self, input: &mut dyn KeyInput, timeout: Option<Duration>) -> Result<Keystroke, HostError> {
		let timeout = timeout.filter(|t| !t.is_zero());
		let mut typed = Keystroke::empty();
		loop {
			let wait = if typed.is_empty() { None } else { timeout };
			let Some(key) = getchar(input, wait)? else {
				debug!(keys = %typed.represent(), "mapping timeout");
				return Ok(self.resolve(&typed, true).resolved().unwrap_or(typed));
			};
			typed = typed.appended(key);
			if let Resolution::Resolved(keystroke) = self.resolve(&typed, false) {
				debug!(typed = %typed.represent(), resolved = %keystroke.represent(), "harvested");
				return Ok(keystroke);
			}
		}
	}
}
