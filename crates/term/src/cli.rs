use std::path::PathBuf;

use clap::Parser;
use prompter_prompt::{InsertMode, PromptConfig};

#[derive(Parser, Debug)]
#[command(name = "prompter")]
#[command(about = "Read one line of input with editor-style key mappings")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to prompter/config.toml in the user config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Keymap rule file merged over the configured rules
	#[arg(long, short = 'k', value_name = "PATH")]
	pub keymap: Option<PathBuf>,

	/// Text shown before the input
	#[arg(long, short = 'p')]
	pub prefix: Option<String>,

	/// Initial input text
	#[arg(long, short = 't', default_value = "")]
	pub text: String,

	/// Start in replace mode
	#[arg(long)]
	pub replace: bool,

	/// History list to browse and append to
	#[arg(long, value_name = "KIND")]
	pub history: Option<String>,

	/// Neither read nor write the history file
	#[arg(long)]
	pub no_history: bool,

	/// Append logs to this file, filtered by PROMPTER_LOG
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,
}

impl Cli {
	/// Overrides configured prompt settings with the ones given on the command line.
	pub fn apply(&self, config: &mut PromptConfig) {
		if let Some(prefix) = &self.prefix {
			config.prefix.clone_from(prefix);
		}
		if self.replace {
			config.insert_mode = InsertMode::Replace;
		}
		if let Some(kind) = &self.history {
			config.history_kind.clone_from(kind);
		}
	}
}
