use pretty_assertions::assert_eq;
use prompter_host::MockHost;
use rstest::rstest;

use super::*;

fn accept(_: &mut Prompt<'_>, _: &str) -> Result<Status, PromptError> {
	Ok(Status::Accept)
}

fn cancel(_: &mut Prompt<'_>, _: &str) -> Result<Status, PromptError> {
	Ok(Status::Cancel)
}

/// Writes its params at the caret.
fn echo_params(prompt: &mut Prompt<'_>, params: &str) -> Result<Status, PromptError> {
	prompt.insert_text(params);
	Ok(Status::Progress)
}

fn only_accept() -> Action {
	let mut action = Action::new();
	action.register("prompt:accept", accept);
	action
}

#[test]
fn registered_name_is_called() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	assert_eq!(only_accept().call(&mut prompt, "prompt:accept").unwrap(), Status::Accept);
}

#[test]
fn unknown_namespace_falls_back_to_prompt() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	assert_eq!(
		only_accept().call(&mut prompt, "othernamespace:accept").unwrap(),
		Status::Accept
	);
}

#[test]
fn own_namespace_wins_over_fallback() {
	let mut action = only_accept();
	action.register("denite:accept", cancel);
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	assert_eq!(action.call(&mut prompt, "denite:accept").unwrap(), Status::Cancel);
}

#[test]
fn unresolvable_name_is_reported() {
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	let err = only_accept()
		.call(&mut prompt, "othernamespace:unknown")
		.unwrap_err();
	assert!(matches!(
		err,
		PromptError::Action(ActionError::Unresolvable(ref name)) if name == "othernamespace:unknown"
	));
	assert_eq!(err.to_string(), "unresolvable action 'othernamespace:unknown'");
}

#[test]
fn params_are_passed_to_the_callback() {
	let mut action = Action::new();
	action.register("test:echo", echo_params);
	let mut host = MockHost::new();
	let mut prompt = Prompt::new(&mut host);
	action.call(&mut prompt, "test:echo:a:b").unwrap();
	assert_eq!(prompt.text(), "a:b");
}

#[rstest]
#[case::plain("prompt:accept", ("prompt:accept", ""))]
#[case::params("prompt:paste:a", ("prompt:paste", "a"))]
#[case::params_with_colons("x:y:a:b", ("x:y", "a:b"))]
#[case::empty_params("x:y:", ("x:y", ""))]
#[case::no_namespace("accept", ("accept", ""))]
fn split_action_cases(#[case] action: &str, #[case] expected: (&str, &str)) {
	assert_eq!(split_action(action), expected);
}

#[rstest]
#[case::plain("<prompt:accept>", Some("prompt:accept"))]
#[case::params("<prompt:paste_from_register:a>", Some("prompt:paste_from_register:a"))]
#[case::no_namespace("<accept>", None)]
#[case::named_key("<CR>", None)]
#[case::trailing_text("<prompt:accept>x", None)]
#[case::literal("abc", None)]
fn action_keystroke_text(#[case] text: &str, #[case] expected: Option<&str>) {
	assert_eq!(parse_action_keystroke(text), expected);
}

#[test]
fn unregister_missing_name() {
	let mut action = only_accept();
	assert_eq!(
		action.unregister("prompt:missing", false),
		Err(ActionError::NotFound("prompt:missing".into()))
	);
	assert_eq!(action.unregister("prompt:missing", true), Ok(()));
	assert_eq!(action.unregister("prompt:accept", false), Ok(()));
	assert!(!action.contains("prompt:accept"));
}

#[test]
fn defaults_are_all_in_prompt_namespace() {
	let action = Action::with_defaults();
	assert_eq!(action.names().count(), DEFAULT_ACTIONS.len());
	assert!(action.names().all(|name| name.starts_with("prompt:")));
}

#[test]
fn clear_empties_registry() {
	let mut action = Action::with_defaults();
	action.clear();
	assert_eq!(action.names().count(), 0);
	assert!(matches!(action.resolve("prompt:accept"), Err(ActionError::Unresolvable(_))));
}
