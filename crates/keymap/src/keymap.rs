//! Rule registry and prefix resolution.

use std::collections::BTreeMap;

use prompter_primitives::{Keystroke, Leaders};
use tracing::{debug, warn};

use crate::error::KeymapError;
use crate::rule::{Rule, RuleSpec};

#[cfg(test)]
mod tests;

/// Expansion limit for remapped chains (`'maxmapdepth'`).
pub const MAX_MAP_DEPTH: usize = 1000;

/// Outcome of [`Keymap::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The keystroke to act on: a rule's `rhs`, or the input itself when no
	/// rule applies.
	Resolved(Keystroke),
	/// Several rules still share the typed prefix.
	Pending,
}

impl Resolution {
	pub fn resolved(self) -> Option<Keystroke> {
		match self {
			Resolution::Resolved(ks) => Some(ks),
			Resolution::Pending => None,
		}
	}
}

/// Mapping rules keyed by `lhs`, kept sorted so every rule extending a
/// prefix forms one contiguous run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
	rules: BTreeMap<Keystroke, Rule>,
}

impl Keymap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses and registers every spec into a fresh keymap.
	pub fn from_rules<I>(specs: I, leaders: &Leaders) -> Result<Self, KeymapError>
	where
		I: IntoIterator,
		I::Item: Into<RuleSpec>,
	{
		let mut keymap = Self::new();
		keymap.register_from_rules(specs, leaders)?;
		Ok(keymap)
	}

	/// Registers a rule, replacing any rule with the same `lhs`.
	pub fn register(&mut self, rule: Rule) {
		self.rules.insert(rule.lhs.clone(), rule);
	}

	/// Parses and registers one rule spec or tuple.
	pub fn register_from_rule(&mut self, spec: impl Into<RuleSpec>, leaders: &Leaders) -> Result<(), KeymapError> {
		let rule = Rule::from_spec(&spec.into(), leaders)?;
		self.register(rule);
		Ok(())
	}

	pub fn register_from_rules<I>(&mut self, specs: I, leaders: &Leaders) -> Result<(), KeymapError>
	where
		I: IntoIterator,
		I::Item: Into<RuleSpec>,
	{
		for spec in specs {
			self.register_from_rule(spec, leaders)?;
		}
		Ok(())
	}

	/// Removes the rule for `lhs`, returning it.
	pub fn unregister(&mut self, lhs: &Keystroke) -> Option<Rule> {
		self.rules.remove(lhs)
	}

	pub fn clear(&mut self) {
		self.rules.clear();
	}

	/// Registers every rule of `other` over this keymap's rules.
	pub fn merge(&mut self, other: &Keymap) {
		self.rules
			.extend(other.rules.iter().map(|(lhs, rule)| (lhs.clone(), rule.clone())));
	}

	/// All rules, sorted by `lhs`.
	pub fn rules(&self) -> impl Iterator<Item = &Rule> {
		self.rules.values()
	}

	pub fn get(&self, lhs: &Keystroke) -> Option<&Rule> {
		self.rules.get(lhs)
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Rules whose `lhs` starts with `partial`, sorted by `lhs`.
	pub fn filter<'a>(&'a self, partial: &'a Keystroke) -> impl Iterator<Item = &'a Rule> + 'a {
		self.rules
			.range(partial.clone()..)
			.take_while(move |(lhs, _)| lhs.starts_with(partial))
			.map(|(_, rule)| rule)
	}

	/// Resolves a partially typed keystroke.
	///
	/// A rule is applied when its `lhs` equals `partial` and it is the only
	/// candidate, or when `nowait` is requested, or when the rule itself is
	/// `nowait`. Anything else with candidates left is [`Resolution::Pending`].
	pub fn resolve(&self, partial: &Keystroke, nowait: bool) -> Resolution {
		self.resolve_at(partial, nowait, 0)
	}

	fn resolve_at(&self, partial: &Keystroke, nowait: bool, depth: usize) -> Resolution {
		let mut candidates = self.filter(partial);
		let Some(first) = candidates.next() else {
			return Resolution::Resolved(partial.clone());
		};
		let sole = candidates.next().is_none();
		if first.lhs != *partial || !(sole || nowait || first.nowait) {
			return Resolution::Pending;
		}
		Resolution::Resolved(self.expand(first, depth))
	}

	fn expand(&self, rule: &Rule, depth: usize) -> Keystroke {
		if rule.noremap {
			return rule.rhs.clone();
		}
		if depth >= MAX_MAP_DEPTH {
			warn!(lhs = %rule.lhs.represent(), "recursive mapping");
			return rule.rhs.clone();
		}
		debug!(lhs = %rule.lhs.represent(), rhs = %rule.rhs.represent(), "remap");
		self.resolve_at(&rule.rhs, true, depth + 1)
			.resolved()
			.unwrap_or_else(|| rule.rhs.clone())
	}
}

impl FromIterator<Rule> for Keymap {
	fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
		let mut keymap = Self::new();
		for rule in iter {
			keymap.register(rule);
		}
		keymap
	}
}
