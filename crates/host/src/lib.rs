//! Host-editor services consumed by the prompt engine.
//!
//! The prompt never talks to an editor directly. It goes through the small
//! capability traits in [`capabilities`], bundled as [`Host`]. One adapter is
//! written per host binding; tests use `MockHost` (feature `test-support`).

pub mod capabilities;
pub mod digraph;
pub mod echo;
mod error;
pub mod input;
pub mod keyword;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use capabilities::{
	DigraphSource, EchoAccess, HistoryAccess, Host, InputState, KeyInput, OptionAccess,
	RegisterAccess,
};
pub use digraph::DigraphTable;
pub use echo::{EchoChunk, caret_notation};
pub use error::HostError;
pub use input::{RawKey, getchar};
pub use keyword::{CharClass, KeywordClass};
#[cfg(any(test, feature = "test-support"))]
pub use mock::MockHost;
