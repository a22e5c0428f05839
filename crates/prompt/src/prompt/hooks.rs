use prompter_primitives::Keystroke;

use super::Prompt;
use crate::error::PromptError;
use crate::status::Status;

/// Lifecycle hooks called by [`Prompt::start_with`].
///
/// Every hook has a default that does the built-in work, so implementors
/// override only what they extend. Call the matching [`Prompt`] method
/// (`init`, `redraw`, `keypress`, `term`) to keep the default behaviour.
pub trait PromptHooks {
	/// Called once before the loop.
	fn on_init(&mut self, prompt: &mut Prompt<'_>) -> Result<Status, PromptError> {
		Ok(prompt.init())
	}

	/// Called after init and after every keypress with the status so far.
	///
	/// A filtering UI would refresh its candidates here.
	fn on_update(&mut self, _prompt: &mut Prompt<'_>, status: Status) -> Result<Status, PromptError> {
		Ok(status)
	}

	fn on_redraw(&mut self, prompt: &mut Prompt<'_>) -> Result<Status, PromptError> {
		prompt.redraw()?;
		Ok(Status::Progress)
	}

	/// Called with each resolved keystroke.
	fn on_keypress(&mut self, prompt: &mut Prompt<'_>, keystroke: &Keystroke) -> Result<Status, PromptError> {
		prompt.keypress(keystroke)
	}

	/// Called once after the loop with its final status.
	fn on_term(&mut self, prompt: &mut Prompt<'_>, status: Status) -> Result<Status, PromptError> {
		prompt.term(status)
	}
}

/// Hooks that only do the built-in work.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl PromptHooks for DefaultHooks {}
