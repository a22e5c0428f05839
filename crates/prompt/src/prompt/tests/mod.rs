
use pretty_assertions::assert_eq;
use prompter_host::MockHost;
use rstest::rstest;

use super::*;

fn prompt_at<'h>(host: &'h mut MockHost, text: &str, locus: isize) -> Prompt<'h> {
	let mut prompt = Prompt::builder().text(text).build(host);
	prompt.context_mut().set_locus(locus);
	prompt
}

#[rstest]
#[case::head("abc", 0, "xy", "xyabc", 2)]
#[case::middle("abc", 1, "xy", "axybc", 3)]
#[case::tail("abc", 3, "xy", "abcxy", 5)]
#[case::multibyte("äöü", 1, "ß", "äßöü", 2)]
fn insert_text_cases(
	#[case] text: &str,
	#[case] locus: isize,
	#[case] insert: &str,
	#[case] expected: &str,
	#[case] expected_locus: usize,
) {
	let mut host = MockHost::new();
	let mut prompt = prompt_at(&mut host, text, locus);
	prompt.insert_text(insert);
	assert_eq!(prompt.text(), expected);
	assert_eq!(prompt.caret().locus(), expected_locus);
}

#[rstest]
#[case::head("abc", 0, "x", "xbc", 1)]
#[case::middle("abc", 1, "xy", "axy", 3)]
#[case::past_tail("abc", 2, "xyz", "abxyz", 5)]
#[case::at_tail("abc", 3, "x", "abcx", 4)]
fn replace_text_cases(
	#[case] text: &str,
	#[case] locus: isize,
	#[case] replace: &str,
	#[case] expected: &str,
	#[case] expected_locus: usize,
) {
	let mut host = MockHost::new();
	let mut prompt = prompt_at(&mut host, text, locus);
	prompt.replace_text(replace);
	assert_eq!(prompt.text(), expected);
	assert_eq!(prompt.caret().locus(), expected_locus);
}

#[test]
fn update_text_follows_mode() {
	let mut host = MockHost::new();
	let mut prompt = prompt_at(&mut host, "abc", 0);
	prompt.update_text("x");
	assert_eq!(prompt.text(), "xabc");
	prompt.set_mode(InsertMode::Replace);
	prompt.update_text("y");
	assert_eq!(prompt.text(), "xybc");
}

#[test]
fn redraw_splits_text_around_caret() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().prefix("> ").text("abc").build(&mut host);
	prompt.context_mut().set_locus(1);
	prompt.redraw().unwrap();
	drop(prompt);
	let chunks = host.echoed.last().unwrap();
	assert_eq!(
		chunks,
		&vec![
			EchoChunk::new("Question", "> "),
			EchoChunk::new("None", "a"),
			EchoChunk::new("IncSearch", "b"),
			EchoChunk::new("None", "c"),
		]
	);
}

#[test]
fn redraw_shows_blank_caret_at_tail() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().text("ab").build(&mut host);
	prompt.redraw().unwrap();
	drop(prompt);
	assert_eq!(
		host.echoed.last().unwrap(),
		&vec![EchoChunk::new("None", "ab"), EchoChunk::new("IncSearch", " ")]
	);
}

#[test]
fn redraw_uses_caret_notation() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().text("a\tb").build(&mut host);
	prompt.redraw().unwrap();
	drop(prompt);
	assert_eq!(host.last_echo(), "a^Ib ");
}

#[test]
fn keypress_writes_literal_text() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	let status = prompt.keypress(&Keystroke::parse("ab")).unwrap();
	assert_eq!(status, Status::Progress);
	assert_eq!(prompt.text(), "ab");
}

#[test]
fn keypress_dispatches_action_keystroke() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	let status = prompt.keypress(&Keystroke::parse("<prompt:accept>")).unwrap();
	assert_eq!(status, Status::Accept);
	assert_eq!(prompt.text(), "");
}

#[test]
fn unknown_bracket_text_is_literal() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	prompt.keypress(&Keystroke::parse("<foo>")).unwrap();
	assert_eq!(prompt.text(), "<foo>");
}

#[test]
fn with_indicator_restores_after_read() {
	let mut host = MockHost::new().keys("x");
	let mut prompt = prompt_at(&mut host, "ab", 1);
	let c = prompt.with_indicator("^", |p| p.read_char()).unwrap();
	assert_eq!(c, Some('x'));
	assert_eq!(prompt.text(), "ab");
	assert_eq!(prompt.caret().locus(), 1);
	drop(prompt);
	assert_eq!(host.last_echo(), "a^b");
}

#[test]
fn with_indicator_restores_on_error() {
	let mut host = MockHost::new().interrupt();
	let mut prompt = prompt_at(&mut host, "ab", 2);
	let result = prompt.with_indicator("?", |p| p.read_key());
	assert!(matches!(result, Err(PromptError::Host(HostError::Interrupted))));
	assert_eq!(prompt.text(), "ab");
	assert_eq!(prompt.caret().locus(), 2);
}

#[test]
fn term_records_history_on_accept() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().text("hello").build(&mut host);
	assert_eq!(prompt.term(Status::Accept).unwrap(), Status::Accept);
	drop(prompt);
	assert_eq!(host.history["input"], vec!["hello".to_string()]);
	assert_eq!(host.restored, 1);
}

#[rstest]
#[case::error_status("hello", Status::Error)]
#[case::empty_text("", Status::Accept)]
fn term_skips_history(#[case] text: &str, #[case] status: Status) {
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().text(text).build(&mut host);
	prompt.term(status).unwrap();
	drop(prompt);
	assert!(host.history.get("input").is_none_or(Vec::is_empty));
}

#[test]
fn keymap_mut_copies_shared_keymap() {
	let shared = Arc::new(Keymap::with_defaults());
	let mut host = MockHost::new();
	let mut prompt = Prompt::builder().keymap(Arc::clone(&shared)).build(&mut host);
	prompt.keymap_mut().clear();
	assert!(prompt.keymap().is_empty());
	assert!(!shared.is_empty());
}
