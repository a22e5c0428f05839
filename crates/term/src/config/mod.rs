//! Configuration file for the `prompter` binary.
//!
//! ```toml
//! [prompt]
//! prefix = "> "
//! timeoutlen = 500
//!
//! [host]
//! iskeyword = "@,48-57,_,-"
//! mapleader = ","
//!
//! [[keymap]]
//! lhs = "jj"
//! rhs = "<Esc>"
//! ```
//!
//! Every section is optional. Without `--config` the file is looked up under
//! the user config directory and silently skipped when absent.

mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, Result};
use prompter_host::keyword::DEFAULT_ISKEYWORD;
use prompter_keymap::{Keymap, RuleSpec};
use prompter_primitives::Leaders;
use prompter_prompt::PromptConfig;
use serde::Deserialize;
use tracing::debug;

/// Whole configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub prompt: PromptConfig,
	pub host: HostSettings,
	/// Rules merged over the default keymap.
	pub keymap: Vec<RuleSpec>,
}

/// Editor-side settings the terminal host stands in for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostSettings {
	/// Keyword character ranges in `'iskeyword'` syntax.
	pub iskeyword: String,
	pub mapleader: Option<String>,
	pub maplocalleader: Option<String>,
	/// Milliseconds to wait on an ambiguous mapping. `0` waits forever.
	pub timeoutlen: u64,
	/// Where accepted input is remembered across runs.
	pub history_file: Option<PathBuf>,
	/// Maximum number of remembered entries.
	pub history_size: usize,
}

impl Default for HostSettings {
	fn default() -> Self {
		Self {
			iskeyword: DEFAULT_ISKEYWORD.to_string(),
			mapleader: None,
			maplocalleader: None,
			timeoutlen: 1000,
			history_file: None,
			history_size: 1000,
		}
	}
}

impl HostSettings {
	pub fn leaders(&self) -> Leaders {
		Leaders::new(self.mapleader.clone(), self.maplocalleader.clone())
	}

	pub fn timeout(&self) -> Option<Duration> {
		(self.timeoutlen > 0).then(|| Duration::from_millis(self.timeoutlen))
	}

	/// Configured history file, or the default one under the user data directory.
	pub fn history_path(&self) -> Option<PathBuf> {
		self.history_file.clone().or_else(default_history_path)
	}
}

impl Config {
	pub fn parse(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&source)?;
		debug!(path = %path.display(), rules = config.keymap.len(), "loaded config");
		Ok(config)
	}

	/// Loads `path` when given; otherwise the default file if it exists.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match default_config_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	/// The default keymap with this file's rules and `extra` merged over it.
	///
	/// `<Leader>` in the rules expands from `leaders`.
	pub fn keymap(&self, extra: &[RuleSpec], leaders: &Leaders) -> Result<Keymap> {
		let mut keymap = Keymap::with_defaults();
		let user = Keymap::from_rules(self.keymap.iter().chain(extra).cloned(), leaders)?;
		keymap.merge(&user);
		Ok(keymap)
	}
}

pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("prompter").join("config.toml"))
}

pub fn default_history_path() -> Option<PathBuf> {
	dirs::data_dir().map(|dir| dir.join("prompter").join("history"))
}
