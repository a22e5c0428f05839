//! Named callbacks dispatched from `<namespace:label[:params]>` keystrokes.
//!
//! A name that is not registered under its own namespace falls back to the
//! `prompt:` namespace, so `<denite:accept>` runs `prompt:accept` unless a
//! `denite:accept` callback exists.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ActionError, PromptError};
use crate::prompt::Prompt;
use crate::status::Status;

mod builtins;
#[cfg(test)]
mod tests;

pub use builtins::DEFAULT_ACTIONS;

/// Namespace every unresolved name falls back to.
pub const FALLBACK_NAMESPACE: &str = "prompt";

/// Matches the text of a keystroke that names an action.
static ACTION_KEYSTROKE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^<(\w+:\w+(?::[^>]*)?)>$").expect("action keystroke pattern is valid"));

/// An action callback. `params` is empty when the action string has none.
pub type ActionFn = fn(&mut Prompt<'_>, &str) -> Result<Status, PromptError>;

/// Registry of action callbacks keyed by `namespace:label`.
#[derive(Debug, Clone, Default)]
pub struct Action {
	registry: BTreeMap<String, ActionFn>,
}

impl Action {
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry holding every built-in `prompt:` action.
	pub fn with_defaults() -> Self {
		let mut action = Self::new();
		action.register_from_rules(DEFAULT_ACTIONS);
		action
	}

	/// Registers `callback` as `name`, replacing any existing callback.
	pub fn register(&mut self, name: impl Into<String>, callback: ActionFn) {
		self.registry.insert(name.into(), callback);
	}

	pub fn register_from_rules(&mut self, rules: &[(&str, ActionFn)]) {
		for &(name, callback) in rules {
			self.register(name, callback);
		}
	}

	/// Removes `name`. A missing name is an error unless `fail_silently`.
	pub fn unregister(&mut self, name: &str, fail_silently: bool) -> Result<(), ActionError> {
		match self.registry.remove(name) {
			Some(_) => Ok(()),
			None if fail_silently => Ok(()),
			None => Err(ActionError::NotFound(name.to_string())),
		}
	}

	pub fn clear(&mut self) {
		self.registry.clear();
	}

	pub fn contains(&self, name: &str) -> bool {
		self.registry.contains_key(name)
	}

	/// Registered names in sorted order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.registry.keys().map(String::as_str)
	}

	/// Finds the callback for an action string and splits off its params.
	pub fn resolve<'a>(&self, action: &'a str) -> Result<(ActionFn, &'a str), ActionError> {
		let (name, params) = split_action(action);
		if let Some(&callback) = self.registry.get(name) {
			return Ok((callback, params));
		}
		let label = name.split_once(':').map_or(name, |(_, label)| label);
		let fallback = format!("{FALLBACK_NAMESPACE}:{label}");
		self.registry
			.get(&fallback)
			.map(|&callback| (callback, params))
			.ok_or_else(|| ActionError::Unresolvable(name.to_string()))
	}

	/// Runs the action named by `action` (`namespace:label[:params]`).
	pub fn call(&self, prompt: &mut Prompt<'_>, action: &str) -> Result<Status, PromptError> {
		let (callback, params) = self.resolve(action)?;
		debug!(action, "dispatch");
		callback(prompt, params)
	}
}

/// Splits `namespace:label:params` into `namespace:label` and `params`.
fn split_action(action: &str) -> (&str, &str) {
	let Some((namespace, rest)) = action.split_once(':') else {
		return (action, "");
	};
	match rest.split_once(':') {
		Some((label, params)) => (&action[..namespace.len() + 1 + label.len()], params),
		None => (action, ""),
	}
}

/// Returns the action string of a keystroke text like `<prompt:accept>`.
pub fn parse_action_keystroke(text: &str) -> Option<&str> {
	ACTION_KEYSTROKE
		.captures(text)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str())
}
