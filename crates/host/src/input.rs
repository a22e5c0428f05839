//! Raw keys as delivered by the host.

use std::time::Duration;

use prompter_primitives::{Key, KeyCode, Leaders};
use tracing::trace;

use crate::capabilities::KeyInput;
use crate::error::HostError;

/// Ctrl-C as a raw code.
pub const INTERRUPT: u32 = 0x03;

/// One key as returned by the host's `getchar()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawKey {
	/// A plain character code.
	Code(u32),
	/// An opaque special-key byte sequence.
	Bytes(Vec<u8>),
}

impl RawKey {
	/// Converts the raw key into a [`Key`].
	pub fn to_key(&self) -> Key {
		match self {
			RawKey::Code(c) => Key::from_code(KeyCode::Char(*c)),
			RawKey::Bytes(b) => Key::parse_bytes(b, &Leaders::default()),
		}
	}
}

impl From<&Key> for RawKey {
	fn from(key: &Key) -> Self {
		match key.code() {
			KeyCode::Char(c) => RawKey::Code(*c),
			KeyCode::Bytes(b) => RawKey::Bytes(b.to_vec()),
		}
	}
}

impl From<char> for RawKey {
	fn from(ch: char) -> Self {
		RawKey::Code(ch as u32)
	}
}

/// Reads one key, turning Ctrl-C into [`HostError::Interrupted`].
///
/// With `timeout` set, `Ok(None)` means the timeout expired with no input.
/// Without it, the call keeps waiting until a key arrives.
pub fn getchar(input: &mut dyn KeyInput, timeout: Option<Duration>) -> Result<Option<Key>, HostError> {
	loop {
		match input.read_key(timeout)? {
			Some(RawKey::Code(INTERRUPT)) => return Err(HostError::Interrupted),
			Some(raw) => {
				trace!(?raw, "getchar");
				return Ok(Some(raw.to_key()));
			}
			None if timeout.is_some() => return Ok(None),
			None => continue,
		}
	}
}
