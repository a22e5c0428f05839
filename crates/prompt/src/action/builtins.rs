//! Built-in `prompt:` actions.

use prompter_primitives::KeyCode;
use tracing::debug;

use super::ActionFn;
use crate::error::PromptError;
use crate::prompt::Prompt;
use crate::status::Status;
use crate::word;

type Outcome = Result<Status, PromptError>;

/// Every built-in action, registered by [`Action::with_defaults`].
///
/// [`Action::with_defaults`]: super::Action::with_defaults
pub const DEFAULT_ACTIONS: &[(&str, ActionFn)] = &[
	("prompt:accept", accept),
	("prompt:cancel", cancel),
	("prompt:toggle_insert_mode", toggle_insert_mode),
	("prompt:delete_char_before_caret", delete_char_before_caret),
	("prompt:delete_word_before_caret", delete_word_before_caret),
	("prompt:delete_char_after_caret", delete_char_after_caret),
	("prompt:delete_word_after_caret", delete_word_after_caret),
	("prompt:delete_char_under_caret", delete_char_under_caret),
	("prompt:delete_word_under_caret", delete_word_under_caret),
	("prompt:delete_text_before_caret", delete_text_before_caret),
	("prompt:delete_text_after_caret", delete_text_after_caret),
	("prompt:delete_entire_text", delete_entire_text),
	("prompt:move_caret_to_left", move_caret_to_left),
	("prompt:move_caret_to_one_word_left", move_caret_to_one_word_left),
	("prompt:move_caret_to_left_anchor", move_caret_to_left_anchor),
	("prompt:move_caret_to_right", move_caret_to_right),
	("prompt:move_caret_to_one_word_right", move_caret_to_one_word_right),
	("prompt:move_caret_to_right_anchor", move_caret_to_right_anchor),
	("prompt:move_caret_to_head", move_caret_to_head),
	("prompt:move_caret_to_lead", move_caret_to_lead),
	("prompt:move_caret_to_tail", move_caret_to_tail),
	("prompt:assign_previous_text", assign_previous_text),
	("prompt:assign_next_text", assign_next_text),
	("prompt:assign_previous_matched_text", assign_previous_matched_text),
	("prompt:assign_next_matched_text", assign_next_matched_text),
	("prompt:paste_from_register", paste_from_register),
	("prompt:paste_from_default_register", paste_from_default_register),
	("prompt:yank_to_register", yank_to_register),
	("prompt:yank_to_default_register", yank_to_default_register),
	("prompt:insert_special", insert_special),
	("prompt:insert_digraph", insert_digraph),
];

fn progress() -> Outcome {
	Ok(Status::Progress)
}

fn accept(_: &mut Prompt<'_>, _: &str) -> Outcome {
	Ok(Status::Accept)
}

fn cancel(_: &mut Prompt<'_>, _: &str) -> Outcome {
	Ok(Status::Cancel)
}

fn toggle_insert_mode(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	prompt.set_mode(prompt.mode().toggled());
	progress()
}

/// Rebuilds the text from the three caret segments with `cut_back` chars
/// removed from the end of the backward text and `cut_fwd` chars removed
/// from the start of `selected + forward`.
fn splice(prompt: &mut Prompt<'_>, cut_back: usize, cut_fwd: usize) {
	let caret = prompt.caret();
	let locus = caret.locus();
	let backward: String = {
		let chars: Vec<char> = caret.backward_text().chars().collect();
		chars[..chars.len() - cut_back.min(chars.len())].iter().collect()
	};
	let forward: String = caret
		.selected_text()
		.chars()
		.chain(caret.forward_text().chars())
		.skip(cut_fwd)
		.collect();
	let new_locus = locus - cut_back.min(locus);
	prompt.context_mut().assign(backward + &forward, new_locus);
}

fn delete_char_before_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	splice(prompt, 1, 0);
	progress()
}

fn delete_word_before_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let n = word::word_before(prompt.caret().backward_text(), prompt.keyword());
	splice(prompt, n, 0);
	progress()
}

/// Removes `n` characters after the one under the caret.
fn cut_after_selected(prompt: &mut Prompt<'_>, n: usize) {
	let caret = prompt.caret();
	let locus = caret.locus();
	let forward: String = caret.forward_text().chars().skip(n).collect();
	let text = format!("{}{}{}", caret.backward_text(), caret.selected_text(), forward);
	prompt.context_mut().assign(text, locus);
}

fn delete_char_after_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	cut_after_selected(prompt, 1);
	progress()
}

fn delete_word_after_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let n = word::word_after(prompt.caret().forward_text(), prompt.keyword());
	cut_after_selected(prompt, n);
	progress()
}

fn delete_char_under_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	splice(prompt, 0, 1);
	progress()
}

/// Deletes the run of same-class characters around the caret.
fn delete_word_under_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let caret = prompt.caret();
	let Some(c) = caret.selected_text().chars().next() else {
		return progress();
	};
	let kw = prompt.keyword();
	let class = kw.classify(c);
	let back: Vec<char> = caret.backward_text().chars().collect();
	let fwd: Vec<char> = caret.selected_text().chars().chain(caret.forward_text().chars()).collect();
	let cut_back = word::run_len(back.iter().rev(), kw, class);
	let cut_fwd = word::run_len(fwd.iter(), kw, class);
	splice(prompt, cut_back, cut_fwd);
	progress()
}

fn delete_text_before_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let n = prompt.caret().locus();
	splice(prompt, n, 0);
	progress()
}

/// Deletes everything after the character under the caret.
fn delete_text_after_caret(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let caret = prompt.caret();
	let text = format!("{}{}", caret.backward_text(), caret.selected_text());
	let locus = caret.locus();
	prompt.context_mut().assign(text, locus);
	progress()
}

fn delete_entire_text(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	prompt.context_mut().assign(String::new(), 0);
	progress()
}

fn move_caret_to_left(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	prompt.context_mut().shift_locus(-1);
	progress()
}

fn move_caret_to_one_word_left(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let n = word::word_before(prompt.caret().backward_text(), prompt.keyword());
	prompt.context_mut().shift_locus(-signed(n));
	progress()
}

/// Moves onto the nearest occurrence of a typed character before the caret.
fn move_caret_to_left_anchor(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let Some(anchor) = prompt.read_char()? else {
		return progress();
	};
	let backward: Vec<char> = prompt.caret().backward_text().chars().collect();
	if let Some(index) = backward.iter().rposition(|&c| c == anchor) {
		prompt.context_mut().set_locus(signed(index));
	}
	progress()
}

fn move_caret_to_right(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	prompt.context_mut().shift_locus(1);
	progress()
}

fn move_caret_to_one_word_right(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let caret = prompt.caret();
	let rest = format!("{}{}", caret.selected_text(), caret.forward_text());
	let n = word::next_word_start(&rest, prompt.keyword());
	prompt.context_mut().shift_locus(signed(n));
	progress()
}

/// Moves onto the nearest occurrence of a typed character after the caret.
fn move_caret_to_right_anchor(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let Some(anchor) = prompt.read_char()? else {
		return progress();
	};
	let caret = prompt.caret();
	if let Some(index) = caret.forward_text().chars().position(|c| c == anchor) {
		let locus = caret.locus() + 1 + index;
		prompt.context_mut().set_locus(signed(locus));
	}
	progress()
}

fn move_caret_to_head(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	prompt.context_mut().set_locus(0);
	progress()
}

fn move_caret_to_lead(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let lead = prompt.caret().lead();
	prompt.context_mut().set_locus(signed(lead));
	progress()
}

fn move_caret_to_tail(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let tail = prompt.caret().tail();
	prompt.context_mut().set_locus(signed(tail));
	progress()
}

/// Replaces the text and puts the caret at its tail. Unchanged text keeps the caret.
fn assign_text(prompt: &mut Prompt<'_>, text: String) -> Outcome {
	if text == prompt.text() {
		return progress();
	}
	let tail = text.chars().count();
	prompt.context_mut().assign(text, tail);
	progress()
}

fn assign_previous_text(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let text = prompt.history_previous(false);
	assign_text(prompt, text)
}

fn assign_next_text(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let text = prompt.history_next(false);
	assign_text(prompt, text)
}

fn assign_previous_matched_text(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let text = prompt.history_previous(true);
	assign_text(prompt, text)
}

fn assign_next_matched_text(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let text = prompt.history_next(true);
	assign_text(prompt, text)
}

/// Register name from `params`, or read one while showing `glyph`.
/// `None` when a special key was pressed instead.
fn register_name(prompt: &mut Prompt<'_>, params: &str, glyph: &str) -> Result<Option<char>, PromptError> {
	if let Some(name) = params.chars().next() {
		return Ok(Some(name));
	}
	prompt.with_indicator(glyph, |p| p.read_char())
}

fn paste_from_register(prompt: &mut Prompt<'_>, params: &str) -> Outcome {
	if let Some(name) = register_name(prompt, params, "\"")? {
		paste(prompt, name);
	}
	progress()
}

fn paste_from_default_register(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let name = prompt.host().default_register();
	paste(prompt, name);
	progress()
}

fn paste(prompt: &mut Prompt<'_>, name: char) {
	let value = prompt.host().register(name).unwrap_or_default();
	debug!(register = %name, len = value.len(), "paste");
	prompt.update_text(&value);
}

fn yank_to_register(prompt: &mut Prompt<'_>, params: &str) -> Outcome {
	if let Some(name) = register_name(prompt, params, "'")? {
		yank(prompt, name);
	}
	progress()
}

fn yank_to_default_register(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let name = prompt.host().default_register();
	yank(prompt, name);
	progress()
}

fn yank(prompt: &mut Prompt<'_>, name: char) {
	let text = prompt.text().to_string();
	prompt.host().set_register(name, &text);
}

/// Inserts the next key literally; special keys insert their notation.
fn insert_special(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let key = prompt.with_indicator("^", |p| p.read_key())?;
	let text = match key.code() {
		KeyCode::Char(_) => key.text().to_string(),
		KeyCode::Bytes(_) => key.represent(),
	};
	prompt.update_text(&text);
	progress()
}

/// Reads two characters and inserts their digraph. A special key aborts.
fn insert_digraph(prompt: &mut Prompt<'_>, _: &str) -> Outcome {
	let Some(c1) = prompt.with_indicator("?", |p| p.read_char())? else {
		return progress();
	};
	let Some(c2) = prompt.with_indicator(&c1.to_string(), |p| p.read_char())? else {
		return progress();
	};
	let composed = prompt.find_digraph(c1, c2)?;
	prompt.update_text(&composed.to_string());
	progress()
}

fn signed(n: usize) -> isize {
	isize::try_from(n).unwrap_or(isize::MAX)
}
