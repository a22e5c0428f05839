//! Built-in prompt key bindings.

use prompter_primitives::Keystroke;

use crate::keymap::Keymap;
use crate::rule::Rule;

/// `(lhs, rhs, noremap)` rules every prompt starts with.
pub const DEFAULT_RULES: &[(&str, &str, bool)] = &[
	("<C-B>", "<prompt:move_caret_to_head>", true),
	("<C-E>", "<prompt:move_caret_to_tail>", true),
	("<BS>", "<prompt:delete_char_before_caret>", true),
	("<C-H>", "<prompt:delete_char_before_caret>", true),
	("<S-TAB>", "<prompt:move_caret_to_left>", true),
	("<C-J>", "<prompt:accept>", true),
	("<C-K>", "<prompt:insert_digraph>", true),
	("<CR>", "<prompt:accept>", true),
	("<C-M>", "<prompt:accept>", true),
	("<C-N>", "<prompt:assign_next_text>", true),
	("<C-P>", "<prompt:assign_previous_text>", true),
	("<C-Q>", "<prompt:insert_special>", true),
	("<C-R>", "<prompt:paste_from_register>", true),
	("<C-U>", "<prompt:delete_entire_text>", true),
	("<C-V>", "<prompt:insert_special>", true),
	("<C-W>", "<prompt:delete_word_before_caret>", true),
	("<ESC>", "<prompt:cancel>", true),
	("<DEL>", "<prompt:delete_char_under_caret>", true),
	("<Left>", "<prompt:move_caret_to_left>", true),
	("<S-Left>", "<prompt:move_caret_to_one_word_left>", true),
	("<C-Left>", "<prompt:move_caret_to_one_word_left>", true),
	("<Right>", "<prompt:move_caret_to_right>", true),
	("<S-Right>", "<prompt:move_caret_to_one_word_right>", true),
	("<C-Right>", "<prompt:move_caret_to_one_word_right>", true),
	("<Up>", "<prompt:assign_previous_matched_text>", true),
	("<S-Up>", "<prompt:assign_previous_text>", true),
	("<Down>", "<prompt:assign_next_matched_text>", true),
	("<S-Down>", "<prompt:assign_next_text>", true),
	("<Home>", "<prompt:move_caret_to_head>", true),
	("<End>", "<prompt:move_caret_to_tail>", true),
	("<PageDown>", "<prompt:assign_next_text>", true),
	("<PageUp>", "<prompt:assign_previous_text>", true),
	("<INSERT>", "<prompt:toggle_insert_mode>", true),
];

impl Keymap {
	/// A keymap holding [`DEFAULT_RULES`].
	pub fn with_defaults() -> Self {
		DEFAULT_RULES
			.iter()
			.map(|&(lhs, rhs, noremap)| Rule::new(Keystroke::parse(lhs), Keystroke::parse(rhs), noremap, false))
			.collect()
	}
}
