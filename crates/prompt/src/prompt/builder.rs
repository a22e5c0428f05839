use std::sync::Arc;

use prompter_host::{DigraphTable, Host, KeywordClass};
use prompter_keymap::Keymap;

use super::Prompt;
use crate::action::Action;
use crate::config::PromptConfig;
use crate::context::Context;
use crate::history::History;

/// Configures a [`Prompt`] before binding it to a host.
///
/// Keymap and action registries are shared through [`Arc`], so many prompts
/// can be built from one template and only copy it when they modify it.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
	config: PromptConfig,
	keymap: Option<Arc<Keymap>>,
	action: Option<Arc<Action>>,
	text: String,
}

impl Default for PromptBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl PromptBuilder {
	pub fn new() -> Self {
		Self {
			config: PromptConfig::default(),
			keymap: None,
			action: None,
			text: String::new(),
		}
	}

	pub fn config(mut self, config: PromptConfig) -> Self {
		self.config = config;
		self
	}

	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.config.prefix = prefix.into();
		self
	}

	/// Text the prompt starts with; the caret starts at its end.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	/// Keymap to use instead of [`Keymap::with_defaults`].
	pub fn keymap(mut self, keymap: impl Into<Arc<Keymap>>) -> Self {
		self.keymap = Some(keymap.into());
		self
	}

	/// Action registry to use instead of [`Action::with_defaults`].
	pub fn action(mut self, action: impl Into<Arc<Action>>) -> Self {
		self.action = Some(action.into());
		self
	}

	pub fn build<'h>(self, host: &'h mut dyn Host) -> Prompt<'h> {
		let keyword = KeywordClass::parse(&host.iskeyword());
		let leaders = host.leaders();
		Prompt {
			context: Context::new(self.text.clone()),
			history: History::new(self.config.history_kind.clone()),
			keymap: self.keymap.unwrap_or_else(|| Arc::new(Keymap::with_defaults())),
			action: self.action.unwrap_or_else(|| Arc::new(Action::with_defaults())),
			mode: self.config.insert_mode,
			config: self.config,
			keyword,
			leaders,
			digraphs: DigraphTable::new(),
			initial_text: self.text,
			host,
		}
	}
}
