use pretty_assertions::assert_eq;
use prompter_primitives::Leaders;
use rstest::rstest;

use super::*;
use crate::DEFAULT_RULES;

fn ks(expr: &str) -> Keystroke {
	Keystroke::parse(expr)
}

fn keymap<S: Into<RuleSpec>>(rules: impl IntoIterator<Item = S>) -> Keymap {
	Keymap::from_rules(rules, &Leaders::default()).unwrap()
}

fn resolved(expr: &str) -> Resolution {
	Resolution::Resolved(ks(expr))
}

#[test]
fn ambiguous_prefix_waits() {
	let km = keymap([("<C-A><C-A>", "<prompt:A>"), ("<C-A><C-B>", "<prompt:B>")]);
	assert_eq!(km.resolve(&ks("<C-A>"), false), Resolution::Pending);
	assert_eq!(km.resolve(&ks("<C-A><C-A>"), false), resolved("<prompt:A>"));
	assert_eq!(km.resolve(&ks("<C-A><C-B>"), false), resolved("<prompt:B>"));
	assert_eq!(km.resolve(&ks("<C-Z>"), false), resolved("<C-Z>"));
}

#[test]
fn nowait_request_without_exact_match_still_waits() {
	let km = keymap([("<C-A><C-A>", "<prompt:A>"), ("<C-A><C-B>", "<prompt:B>")]);
	assert_eq!(km.resolve(&ks("<C-A>"), true), Resolution::Pending);
}

#[test]
fn nowait_request_commits_exact_match() {
	let km = keymap([("<C-A>", "<prompt:single>"), ("<C-A><C-A>", "<prompt:A>")]);
	assert_eq!(km.resolve(&ks("<C-A>"), false), Resolution::Pending);
	assert_eq!(km.resolve(&ks("<C-A>"), true), resolved("<prompt:single>"));
}

#[test]
fn nowait_rule_commits_without_waiting() {
	let km = keymap([
		("<C-A>", "<prompt:single>", true, true),
		("<C-A><C-A>", "<prompt:A>", true, false),
	]);
	assert_eq!(km.resolve(&ks("<C-A>"), false), resolved("<prompt:single>"));
}

#[test]
fn single_candidate_longer_than_partial_waits() {
	let km = keymap([("abc", "x")]);
	assert_eq!(km.resolve(&ks("a"), false), Resolution::Pending);
	assert_eq!(km.resolve(&ks("ab"), true), Resolution::Pending);
	assert_eq!(km.resolve(&ks("abc"), false), resolved("x"));
}

#[test]
fn empty_partial_matches_every_rule() {
	let km = keymap([("a", "1"), ("b", "2")]);
	assert_eq!(km.filter(&Keystroke::empty()).count(), 2);
	assert_eq!(km.resolve(&Keystroke::empty(), false), Resolution::Pending);
	assert_eq!(Keymap::new().resolve(&Keystroke::empty(), false), resolved(""));
}

#[rstest]
#[case::noremap(true, "Y")]
#[case::remap(false, "Z")]
fn noremap_stops_expansion(#[case] noremap: bool, #[case] expected: &str) {
	let km = keymap([("X", "Y", noremap), ("Y", "Z", false)]);
	assert_eq!(km.resolve(&ks("X"), false), resolved(expected));
}

#[test]
fn remap_chain_follows_several_rules() {
	let km = keymap([("a", "b"), ("b", "c"), ("c", "<prompt:accept>")]);
	assert_eq!(km.resolve(&ks("a"), false), resolved("<prompt:accept>"));
}

#[test]
fn remap_to_ambiguous_prefix_returns_rhs() {
	let km = keymap([("x", "ab"), ("abc", "1"), ("abd", "2")]);
	assert_eq!(km.resolve(&ks("x"), false), resolved("ab"));
}

#[test]
fn recursive_mapping_is_cut_off() {
	let km = keymap([("a", "b"), ("b", "a")]);
	assert!(matches!(km.resolve(&ks("a"), false), Resolution::Resolved(_)));
}

#[test]
fn registering_same_lhs_overwrites() {
	let mut km = keymap([("a", "1")]);
	km.register_from_rule(("a", "2"), &Leaders::default()).unwrap();
	assert_eq!(km.len(), 1);
	assert_eq!(km.resolve(&ks("a"), false), resolved("2"));
}

#[test]
fn filter_is_sorted_and_prefix_only() {
	let km = keymap([("ba", "1"), ("ab", "2"), ("a", "3"), ("aa", "4"), ("b", "5")]);
	let lhs: Vec<_> = km.filter(&ks("a")).map(|r| r.lhs.to_string()).collect();
	assert_eq!(lhs, vec!["a", "aa", "ab"]);
}

#[test]
fn unregister_and_clear() {
	let mut km = keymap([("a", "1"), ("b", "2")]);
	assert_eq!(km.unregister(&ks("a")).map(|r| r.rhs), Some(ks("1")));
	assert_eq!(km.unregister(&ks("a")), None);
	assert_eq!(km.len(), 1);
	km.clear();
	assert!(km.is_empty());
}

#[test]
fn merge_overrides_template() {
	let mut km = Keymap::with_defaults();
	let before = km.len();
	let user = keymap([("<CR>", "<prompt:cancel>"), ("<C-T>", "<prompt:toggle_insert_mode>")]);
	km.merge(&user);
	assert_eq!(km.len(), before + 1);
	assert_eq!(km.resolve(&ks("<CR>"), false), resolved("<prompt:cancel>"));
}

#[test]
fn leader_in_rules() {
	let leaders = Leaders::new(Some(",".into()), None);
	let km = Keymap::from_rules([("<Leader>a", "<prompt:accept>")], &leaders).unwrap();
	assert_eq!(km.resolve(&ks(",a"), false), resolved("<prompt:accept>"));
}

#[test]
fn empty_lhs_is_rejected() {
	let err = Keymap::from_rules([("", "x")], &Leaders::default()).unwrap_err();
	assert!(matches!(err, KeymapError::InvalidRule(_)));
}

#[test]
fn cr_and_ctrl_m_share_one_rule() {
	assert_eq!(Keymap::with_defaults().len(), DEFAULT_RULES.len() - 1);
}

#[rstest]
#[case("<C-H>", "<prompt:delete_char_before_caret>")]
#[case("<BS>", "<prompt:delete_char_before_caret>")]
#[case("<Esc>", "<prompt:cancel>")]
#[case("<C-M>", "<prompt:accept>")]
#[case("<S-Up>", "<prompt:assign_previous_text>")]
#[case("<Insert>", "<prompt:toggle_insert_mode>")]
fn default_bindings(#[case] lhs: &str, #[case] rhs: &str) {
	assert_eq!(Keymap::with_defaults().resolve(&ks(lhs), false), resolved(rhs));
}
