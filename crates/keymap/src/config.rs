//! TOML rule files.
//!
//! ```toml
//! keymap = [
//!     ["<C-T>", "<prompt:toggle_insert_mode>", true],
//!     { lhs = "jj", rhs = "<Esc>" },
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::KeymapError;
use crate::rule::RuleSpec;

/// Top level of a rule file. Other keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct KeymapFile {
	#[serde(default)]
	pub keymap: Vec<RuleSpec>,
}

/// Parses rules from TOML source.
pub fn parse_rules(source: &str) -> Result<Vec<RuleSpec>, KeymapError> {
	let file: KeymapFile = toml::from_str(source)?;
	Ok(file.keymap)
}

/// Reads and parses a rule file.
pub fn load_rules(path: &Path) -> Result<Vec<RuleSpec>, KeymapError> {
	let source = std::fs::read_to_string(path).map_err(|error| KeymapError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let rules = parse_rules(&source)?;
	debug!(path = %path.display(), count = rules.len(), "loaded keymap rules");
	Ok(rules)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	const RULES: &str = r#"
		keymap = [
			["<C-T>", "<prompt:toggle_insert_mode>"],
			["<C-X>", "<prompt:cancel>", true],
			["jj", "<Esc>", false, true],
			{ lhs = "<C-Y>", rhs = "<prompt:yank_to_default_register>", noremap = true },
		]
	"#;

	#[test]
	fn tuples_and_tables() {
		let rules = parse_rules(RULES).unwrap();
		assert_eq!(
			rules,
			vec![
				RuleSpec::new("<C-T>", "<prompt:toggle_insert_mode>"),
				RuleSpec::new("<C-X>", "<prompt:cancel>").noremap(true),
				RuleSpec::new("jj", "<Esc>").nowait(true),
				RuleSpec::new("<C-Y>", "<prompt:yank_to_default_register>").noremap(true),
			]
		);
	}

	#[test]
	fn missing_keymap_is_empty() {
		assert!(parse_rules("prefix = '> '").unwrap().is_empty());
	}

	#[test]
	fn bad_toml_is_reported() {
		assert!(matches!(parse_rules("keymap = [[1]]"), Err(KeymapError::Toml(_))));
	}

	#[test]
	fn load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(RULES.as_bytes()).unwrap();
		assert_eq!(load_rules(file.path()).unwrap().len(), 4);
	}

	#[test]
	fn missing_file_names_the_path() {
		let err = load_rules(Path::new("/nonexistent/prompter/keymap.toml")).unwrap_err();
		assert!(err.to_string().contains("/nonexistent/prompter/keymap.toml"));
	}
}
