//! Terminal key events as host raw keys.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use prompter_host::RawKey;
use prompter_primitives::{Key, KeyCode as Code};

/// Waits for the next key press. `Ok(None)` once `timeout` passes without one.
pub fn read(timeout: Option<Duration>) -> io::Result<Option<RawKey>> {
	let deadline = timeout.map(|t| Instant::now() + t);
	loop {
		if let Some(deadline) = deadline
			&& !event::poll(deadline.saturating_duration_since(Instant::now()))?
		{
			return Ok(None);
		}
		if let Event::Key(key) = event::read()?
			&& let Some(raw) = raw_key(&key)
		{
			return Ok(Some(raw));
		}
	}
}

/// Maps a key event to the code the editor would report for it.
///
/// Modifier combinations the key notation cannot express fall back to the
/// unmodified key.
pub fn raw_key(key: &KeyEvent) -> Option<RawKey> {
	if key.kind == KeyEventKind::Release {
		return None;
	}
	let mods = key.modifiers;
	let name = match key.code {
		KeyCode::Char(c) if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
			return Some(RawKey::from(c));
		}
		KeyCode::Char(c) => c.to_string(),
		KeyCode::Enter => "CR".to_string(),
		KeyCode::Tab => "Tab".to_string(),
		KeyCode::BackTab => "S-Tab".to_string(),
		KeyCode::Backspace => "BS".to_string(),
		KeyCode::Esc => "Esc".to_string(),
		KeyCode::Delete => "Del".to_string(),
		KeyCode::Insert => "Insert".to_string(),
		KeyCode::Home => "Home".to_string(),
		KeyCode::End => "End".to_string(),
		KeyCode::PageUp => "PageUp".to_string(),
		KeyCode::PageDown => "PageDown".to_string(),
		KeyCode::Up => "Up".to_string(),
		KeyCode::Down => "Down".to_string(),
		KeyCode::Left => "Left".to_string(),
		KeyCode::Right => "Right".to_string(),
		KeyCode::F(n) => format!("F{n}"),
		_ => return None,
	};

	let mut prefix = String::new();
	if mods.contains(KeyModifiers::CONTROL) {
		prefix.push_str("C-");
	}
	if mods.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
		prefix.push_str("S-");
	}
	if mods.contains(KeyModifiers::ALT) {
		prefix.push_str("M-");
	}

	named(&format!("<{prefix}{name}>")).or_else(|| match key.code {
		KeyCode::Char(c) => Some(RawKey::from(c)),
		_ => named(&format!("<{name}>")),
	})
}

/// Parses key notation, rejecting text the notation passes through literally.
fn named(notation: &str) -> Option<RawKey> {
	let key = Key::parse(notation);
	match key.code() {
		code @ Code::Bytes(_) if !code.is_special() => None,
		_ => Some(RawKey::from(&key)),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn notation(expr: &str) -> Option<RawKey> {
		Some(RawKey::from(&Key::parse(expr)))
	}

	#[rstest]
	#[case::letter(KeyCode::Char('a'), KeyModifiers::NONE, "a")]
	#[case::shifted_letter(KeyCode::Char('A'), KeyModifiers::SHIFT, "A")]
	#[case::ctrl_letter(KeyCode::Char('a'), KeyModifiers::CONTROL, "<C-A>")]
	#[case::ctrl_c(KeyCode::Char('c'), KeyModifiers::CONTROL, "<C-C>")]
	#[case::alt_letter(KeyCode::Char('x'), KeyModifiers::ALT, "<M-x>")]
	#[case::enter(KeyCode::Enter, KeyModifiers::NONE, "<CR>")]
	#[case::escape(KeyCode::Esc, KeyModifiers::NONE, "<Esc>")]
	#[case::backspace(KeyCode::Backspace, KeyModifiers::NONE, "<BS>")]
	#[case::back_tab(KeyCode::BackTab, KeyModifiers::SHIFT, "<S-Tab>")]
	#[case::shift_left(KeyCode::Left, KeyModifiers::SHIFT, "<S-Left>")]
	#[case::ctrl_right(KeyCode::Right, KeyModifiers::CONTROL, "<C-Right>")]
	#[case::function(KeyCode::F(5), KeyModifiers::NONE, "<F5>")]
	#[case::unexpressible_modifier(KeyCode::Home, KeyModifiers::ALT | KeyModifiers::SHIFT, "<Home>")]
	fn maps_to_notation(#[case] code: KeyCode, #[case] modifiers: KeyModifiers, #[case] expected: &str) {
		assert_eq!(raw_key(&press(code, modifiers)), notation(expected));
	}

	#[test]
	fn ctrl_c_is_the_interrupt_code() {
		let raw = raw_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert_eq!(raw, Some(RawKey::Code(prompter_host::input::INTERRUPT)));
	}

	#[test]
	fn releases_and_unknown_keys_are_ignored() {
		let mut release = press(KeyCode::Char('a'), KeyModifiers::NONE);
		release.kind = KeyEventKind::Release;
		assert_eq!(raw_key(&release), None);
		assert_eq!(raw_key(&press(KeyCode::CapsLock, KeyModifiers::NONE)), None);
	}
}
