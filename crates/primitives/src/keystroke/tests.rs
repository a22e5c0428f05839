use proptest::prelude::*;

use super::*;
use crate::key::KeyCode;

fn codes(ks: &Keystroke) -> Vec<KeyCode> {
	ks.keys().iter().map(|k| k.code().clone()).collect()
}

#[test]
fn tokenizes_brackets_and_chars() {
	let ks = Keystroke::parse("a<C-A><Left>b");
	assert_eq!(
		codes(&ks),
		vec![
			KeyCode::Char(97),
			KeyCode::Char(1),
			KeyCode::Bytes(b"\x80kl".as_slice().into()),
			KeyCode::Char(98),
		]
	);
}

#[test]
fn unclosed_bracket_is_a_plain_char() {
	let ks = Keystroke::parse("<a");
	assert_eq!(ks.len(), 2);
	assert_eq!(ks.keys()[0], Key::from('<'));

	let ks = Keystroke::parse("<<CR>");
	assert_eq!(ks, Keystroke::from_keys(vec![Key::from('<'), Key::parse("<CR>")]));

	assert_eq!(Keystroke::parse("<>").len(), 2);
}

#[test]
fn action_string_stays_one_key() {
	let ks = Keystroke::parse("<prompt:insert_text:foo bar>");
	assert_eq!(ks.len(), 1);
	assert_eq!(ks.text(), "<prompt:insert_text:foo bar>");
}

#[test]
fn raw_special_sequences() {
	let ks = Keystroke::parse_bytes(b"\x80kux\x80\xfc\x04\x80kd", &Leaders::default());
	assert_eq!(
		ks,
		Keystroke::from_keys(vec![
			Key::parse("<Up>"),
			Key::parse("x"),
			Key::parse("<C-Down>"),
		])
	);
}

#[test]
fn multibyte_chars() {
	let ks = Keystroke::parse("héé");
	assert_eq!(ks.len(), 3);
	assert_eq!(ks.to_string(), "héé");
}

#[test]
fn represent_and_display() {
	let ks = Keystroke::parse("<c-a>x<insert>");
	assert_eq!(ks.represent(), "<C-A>x<INSERT>");
	assert_eq!(ks.to_string(), "\u{1}x");
}

#[test]
fn appended_does_not_touch_original() {
	let ks = Keystroke::parse("ab");
	let longer = ks.appended(Key::from('c'));
	assert_eq!(ks.len(), 2);
	assert_eq!(longer, Keystroke::parse("abc"));
	assert!(longer.starts_with(&ks));
	assert!(!ks.starts_with(&longer));
}

#[test]
fn ordering_puts_prefix_first() {
	let mut all = vec![
		Keystroke::parse("<C-A><C-B>"),
		Keystroke::parse("<C-B>"),
		Keystroke::parse("<C-A>"),
		Keystroke::parse("<C-A><C-A>"),
	];
	all.sort();
	assert_eq!(all[0], Keystroke::parse("<C-A>"));
	assert_eq!(all[1], Keystroke::parse("<C-A><C-A>"));
	assert_eq!(all[3], Keystroke::parse("<C-B>"));
}

fn keystroke() -> impl Strategy<Value = Keystroke> {
	prop::collection::vec(
		prop_oneof![
			any::<char>().prop_map(Key::from_char),
			Just(Key::parse("<Left>")),
			Just(Key::parse("<C-S-F1>")),
		],
		0..8,
	)
	.prop_map(Keystroke::from_keys)
}

proptest! {
	#[test]
	fn starts_with_itself(k in keystroke()) {
		prop_assert!(k.starts_with(&k));
	}

	#[test]
	fn everything_starts_with_empty(k in keystroke()) {
		prop_assert!(k.starts_with(&Keystroke::empty()));
	}

	#[test]
	fn never_starts_with_longer(k in keystroke(), extra in keystroke()) {
		prop_assume!(!extra.is_empty());
		let longer: Keystroke = k.keys().iter().chain(extra.keys()).cloned().collect();
		prop_assert!(!k.starts_with(&longer));
	}

	#[test]
	fn represent_parses_back(k in keystroke()) {
		prop_assert_eq!(Keystroke::parse(&k.represent()), k);
	}
}
