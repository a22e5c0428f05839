//! Mapping rules and their external forms.

use prompter_primitives::{Keystroke, Leaders};
use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

/// One parsed mapping rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	pub lhs: Keystroke,
	pub rhs: Keystroke,
	/// Do not expand `rhs` through other rules.
	pub noremap: bool,
	/// Commit as soon as `lhs` matches, even if longer rules share the prefix.
	pub nowait: bool,
}

impl Rule {
	pub fn new(lhs: Keystroke, rhs: Keystroke, noremap: bool, nowait: bool) -> Self {
		Self {
			lhs,
			rhs,
			noremap,
			nowait,
		}
	}

	/// Parses a rule spec, expanding `<Leader>` from `leaders`.
	pub fn from_spec(spec: &RuleSpec, leaders: &Leaders) -> Result<Self, KeymapError> {
		let lhs = Keystroke::parse_with(&spec.lhs, leaders);
		if lhs.is_empty() {
			return Err(KeymapError::InvalidRule(format!("empty lhs for rhs {:?}", spec.rhs)));
		}
		let rhs = Keystroke::parse_with(&spec.rhs, leaders);
		Ok(Self::new(lhs, rhs, spec.noremap, spec.nowait))
	}
}

/// A rule in textual key notation.
///
/// Deserializes from a table (`{ lhs, rhs, noremap, nowait }`) or from a
/// 2-, 3- or 4-element array (`[lhs, rhs, noremap, nowait]`). Missing flags
/// default to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SpecForm")]
pub struct RuleSpec {
	pub lhs: String,
	pub rhs: String,
	pub noremap: bool,
	pub nowait: bool,
}

impl RuleSpec {
	pub fn new(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
		Self {
			lhs: lhs.into(),
			rhs: rhs.into(),
			noremap: false,
			nowait: false,
		}
	}

	pub fn noremap(mut self, noremap: bool) -> Self {
		self.noremap = noremap;
		self
	}

	pub fn nowait(mut self, nowait: bool) -> Self {
		self.nowait = nowait;
		self
	}
}

impl From<(&str, &str)> for RuleSpec {
	fn from((lhs, rhs): (&str, &str)) -> Self {
		Self::new(lhs, rhs)
	}
}

impl From<(&str, &str, bool)> for RuleSpec {
	fn from((lhs, rhs, noremap): (&str, &str, bool)) -> Self {
		Self::new(lhs, rhs).noremap(noremap)
	}
}

impl From<(&str, &str, bool, bool)> for RuleSpec {
	fn from((lhs, rhs, noremap, nowait): (&str, &str, bool, bool)) -> Self {
		Self::new(lhs, rhs).noremap(noremap).nowait(nowait)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecForm {
	Table {
		lhs: String,
		rhs: String,
		#[serde(default)]
		noremap: bool,
		#[serde(default)]
		nowait: bool,
	},
	Pair(String, String),
	Triple(String, String, bool),
	Quad(String, String, bool, bool),
}

impl From<SpecForm> for RuleSpec {
	fn from(form: SpecForm) -> Self {
		let (lhs, rhs, noremap, nowait) = match form {
			SpecForm::Table {
				lhs,
				rhs,
				noremap,
				nowait,
			} => (lhs, rhs, noremap, nowait),
			SpecForm::Pair(lhs, rhs) => (lhs, rhs, false, false),
			SpecForm::Triple(lhs, rhs, noremap) => (lhs, rhs, noremap, false),
			SpecForm::Quad(lhs, rhs, noremap, nowait) => (lhs, rhs, noremap, nowait),
		};
		Self {
			lhs,
			rhs,
			noremap,
			nowait,
		}
	}
}
