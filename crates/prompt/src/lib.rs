//! Interactive single-line prompt for editor command lines.
//!
//! A [`Prompt`] reads keys from a [`Host`](prompter_host::Host), resolves
//! them through a [`Keymap`](prompter_keymap::Keymap), and either writes the
//! resulting text at the caret or dispatches it to a registered [`Action`]
//! when it names one (`<prompt:accept>`). The session ends when a phase
//! returns anything other than [`Status::Progress`].

pub use action::{Action, ActionFn, DEFAULT_ACTIONS, FALLBACK_NAMESPACE, parse_action_keystroke};
pub use config::PromptConfig;
pub use context::{Caret, CharIdx, Context, Snapshot};
pub use error::{ActionError, PromptError};
pub use history::History;
pub use prompt::{DefaultHooks, Prompt, PromptBuilder, PromptHooks};
pub use status::{InsertMode, Status};

mod action;
mod config;
mod context;
mod error;
mod history;
mod prompt;
mod status;
pub mod word;
