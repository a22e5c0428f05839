//! Keystroke mapping for editor-embedded prompts.
//!
//! A [`Keymap`] holds `lhs -> rhs` [`Rule`]s and resolves a partially typed
//! keystroke against them the way the host editor resolves its own mappings:
//! - no rule starts with the keystroke: it is taken literally
//! - exactly one rule matches it: the rule's `rhs` replaces it
//! - several rules start with it: wait for more keys, or commit once the
//!   mapping timeout expires (see [`Keymap::harvest`])

pub use config::{KeymapFile, load_rules, parse_rules};
pub use defaults::DEFAULT_RULES;
pub use error::KeymapError;
pub use keymap::{Keymap, MAX_MAP_DEPTH, Resolution};
pub use rule::{Rule, RuleSpec};

mod config;
mod defaults;
mod error;
mod harvest;
mod keymap;
mod rule;
