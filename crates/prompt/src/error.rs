//! Error types for prompt sessions and action dispatch.

use prompter_host::HostError;
use prompter_keymap::KeymapError;
use thiserror::Error;

/// Errors from the action registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
	/// `unregister` was asked to remove a name that is not registered.
	#[error("no action named '{0}' is registered")]
	NotFound(String),

	/// No callback exists for the name, even after the `prompt:` fallback.
	#[error("unresolvable action '{0}'")]
	Unresolvable(String),
}

/// Errors that end a prompt session or an action callback.
#[derive(Debug, Error)]
pub enum PromptError {
	#[error(transparent)]
	Host(#[from] HostError),

	#[error(transparent)]
	Action(#[from] ActionError),

	#[error(transparent)]
	Keymap(#[from] KeymapError),
}
