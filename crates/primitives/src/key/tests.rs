use rstest::rstest;

use super::table::SPECIAL_KEYS;
use super::*;

fn bytes(b: &[u8]) -> KeyCode {
	KeyCode::Bytes(b.into())
}

#[test]
fn every_table_entry_round_trips() {
	for (name, code) in SPECIAL_KEYS {
		let key = Key::parse(&format!("<{}>", name.to_lowercase()));
		assert_eq!(key.code(), &code.to_key_code(), "{name}");
		assert_eq!(key.represent(), format!("<{name}>"));
	}
}

#[rstest]
#[case::insert("<Insert>", bytes(b"\x80kI"), "<INSERT>")]
#[case::cr("<CR>", KeyCode::Char(13), "<CR>")]
#[case::enter_alias("<Enter>", KeyCode::Char(13), "<CR>")]
#[case::nul_alias("<Nul>", KeyCode::Char(10), "<NL>")]
#[case::delete_alias("<Delete>", bytes(b"\x80kD"), "<DEL>")]
#[case::shift_tab("<S-Tab>", bytes(b"\x80kB"), "<S-TAB>")]
#[case::ctrl_left("<C-Left>", bytes(b"\x80\xfdT"), "<C-LEFT>")]
#[case::keypad("<k5>", bytes(b"\x80KH"), "<K5>")]
fn named_keys(#[case] expr: &str, #[case] code: KeyCode, #[case] repr: &str) {
	let key = Key::parse(expr);
	assert_eq!(key.code(), &code);
	assert_eq!(key.represent(), repr);
}

#[rstest]
#[case("<C-A>", 1)]
#[case("<C-a>", 1)]
#[case("<C-Z>", 26)]
#[case("<C-[>", 27)]
#[case("<C-\\>", 28)]
#[case("<C-_>", 31)]
#[case("<C-?>", 31)]
fn control_letters_are_plain_codes(#[case] expr: &str, #[case] code: u32) {
	assert_eq!(Key::parse(expr).code(), &KeyCode::Char(code));
}

#[test]
fn control_of_non_letter_uses_modifier_prefix() {
	let key = Key::parse("<C-1>");
	assert_eq!(key.code(), &bytes(b"\x80\xfc\x041"));
	assert_eq!(key.represent(), "<C-1>");
	assert!(key.is_special());
	assert_eq!(key.text(), "");
}

#[test]
fn control_of_named_key() {
	let key = Key::parse("<C-Up>");
	assert_eq!(key.code(), &bytes(b"\x80\xfc\x04\x80ku"));
	assert_eq!(key.represent(), "<C-UP>");
}

#[test]
fn ctrl_shift_both_orders() {
	let a = Key::parse("<C-S-x>");
	let b = Key::parse("<S-C-x>");
	assert_eq!(a, b);
	assert_eq!(a.code(), &bytes(b"\x80\xfc\x06x"));
	assert_eq!(a.represent(), "<C-S-x>");
}

#[test]
fn meta_and_alt_are_the_same_and_keep_case() {
	assert_eq!(Key::parse("<M-a>"), Key::parse("<A-a>"));
	assert_ne!(Key::parse("<M-a>"), Key::parse("<M-A>"));
	assert_eq!(Key::parse("<M-a>").represent(), "<M-a>");
	assert_eq!(Key::parse("<M-Space>").represent(), "<M-SPACE>");
}

#[test]
fn leader_defaults_to_backslash() {
	assert_eq!(Key::parse("<Leader>").code(), &KeyCode::Char(92));
	assert_eq!(Key::parse("<LocalLeader>").code(), &KeyCode::Char(92));
}

#[test]
fn leader_uses_configured_value() {
	let leaders = Leaders::new(Some(",".into()), Some(String::new()));
	assert_eq!(Key::parse_with("<Leader>", &leaders), Key::from_char(','));
	assert_eq!(Key::parse_with("<LocalLeader>", &leaders), Key::from_char('\\'));
}

#[test]
fn single_characters() {
	let key = Key::parse("a");
	assert_eq!(key.code(), &KeyCode::Char(97));
	assert_eq!(key.text(), "a");
	assert_eq!(key.as_char(), Some('a'));
	assert!(!key.is_special());

	let wide = Key::parse("é");
	assert_eq!(wide.code(), &KeyCode::Char('é' as u32));
	assert_eq!(wide, Key::from('é'));
}

#[test]
fn special_sequences_pass_through() {
	let key = Key::parse_bytes(b"\x80ku", &Leaders::default());
	assert_eq!(key, Key::parse("<Up>"));
	assert_eq!(key.text(), "");
	assert_eq!(key.as_char(), None);
}

#[rstest]
#[case("<foo>")]
#[case("<prompt:accept>")]
#[case("<C->")]
#[case("ab")]
fn unresolved_expressions_are_literal(#[case] expr: &str) {
	let key = Key::parse(expr);
	assert_eq!(key.code(), &bytes(expr.as_bytes()));
	assert_eq!(key.text(), expr);
	assert_eq!(key.represent(), expr);
	assert!(!key.is_special());
}

#[test]
fn equality_ignores_text() {
	let a = Key::from_code(KeyCode::Char(13));
	let b = Key::parse("<Return>");
	assert_eq!(a, b);
	assert_eq!(a.to_string(), "\r");
}

#[test]
fn code_to_bytes() {
	assert_eq!(KeyCode::Char('é' as u32).to_bytes().as_slice(), "é".as_bytes());
	assert_eq!(bytes(b"\x80kb").to_bytes().as_slice(), b"\x80kb");
	assert!(KeyCode::Char(0xD800).to_bytes().is_empty());
}
