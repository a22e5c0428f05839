use serde::{Deserialize, Serialize};

/// Default leader used when the host does not configure one.
pub const DEFAULT_LEADER: &str = "\\";

/// Host-configured leader strings substituted for `<Leader>` and `<LocalLeader>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaders {
	/// Expansion of `<Leader>` (`mapleader`).
	pub leader: String,
	/// Expansion of `<LocalLeader>` (`maplocalleader`).
	pub local_leader: String,
}

impl Default for Leaders {
	fn default() -> Self {
		Self {
			leader: DEFAULT_LEADER.to_string(),
			local_leader: DEFAULT_LEADER.to_string(),
		}
	}
}

impl Leaders {
	/// Builds leaders from optional host values, falling back to `\`.
	pub fn new(leader: Option<String>, local_leader: Option<String>) -> Self {
		Self {
			leader: leader.filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_LEADER.to_string()),
			local_leader: local_leader
				.filter(|s| !s.is_empty())
				.unwrap_or_else(|| DEFAULT_LEADER.to_string()),
		}
	}
}
