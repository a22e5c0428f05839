//! Word boundaries over prompt text.
//!
//! A word is a maximal run of characters of one non-blank [`CharClass`], so
//! `foo.bar` holds three words. All functions return character counts.

use prompter_host::{CharClass, KeywordClass};

/// Trailing blanks plus the last word of `text`.
pub fn word_before(text: &str, kw: &KeywordClass) -> usize {
	let chars: Vec<char> = text.chars().collect();
	let blanks = run_len(chars.iter().rev(), kw, CharClass::Blank);
	let word = match chars.len().checked_sub(blanks + 1) {
		Some(last) => run_len(chars[..=last].iter().rev(), kw, kw.classify(chars[last])),
		None => 0,
	};
	blanks + word
}

/// Leading blanks plus the first word of `text`.
pub fn word_after(text: &str, kw: &KeywordClass) -> usize {
	let chars: Vec<char> = text.chars().collect();
	let blanks = run_len(chars.iter(), kw, CharClass::Blank);
	let word = match chars.get(blanks) {
		Some(&c) => run_len(chars[blanks..].iter(), kw, kw.classify(c)),
		None => 0,
	};
	blanks + word
}

/// The first word of `text` plus the blanks after it, i.e. the distance to
/// the start of the next word.
pub fn next_word_start(text: &str, kw: &KeywordClass) -> usize {
	let chars: Vec<char> = text.chars().collect();
	let word = match chars.first() {
		Some(&c) if kw.classify(c) != CharClass::Blank => run_len(chars.iter(), kw, kw.classify(c)),
		_ => 0,
	};
	word + run_len(chars[word..].iter(), kw, CharClass::Blank)
}

/// Length of the leading run of `class` in `chars`.
pub fn run_len<'a>(chars: impl Iterator<Item = &'a char>, kw: &KeywordClass, class: CharClass) -> usize {
	chars.take_while(|&&c| kw.classify(c) == class).count()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("foo bar", 3)]
	#[case("foo bar  ", 5)]
	#[case("foo.bar", 3)]
	#[case("foo.", 1)]
	#[case("   ", 3)]
	#[case("", 0)]
	#[case("abc日本", 2)]
	fn before(#[case] text: &str, #[case] expected: usize) {
		assert_eq!(word_before(text, &KeywordClass::default()), expected);
	}

	#[rstest]
	#[case("foo bar", 3)]
	#[case("  foo bar", 5)]
	#[case("..foo", 2)]
	#[case("  ", 2)]
	#[case("", 0)]
	fn after(#[case] text: &str, #[case] expected: usize) {
		assert_eq!(word_after(text, &KeywordClass::default()), expected);
	}

	#[rstest]
	#[case("foo bar", 4)]
	#[case("foo.bar", 3)]
	#[case("  bar", 2)]
	#[case("foo", 3)]
	#[case("", 0)]
	fn next_start(#[case] text: &str, #[case] expected: usize) {
		assert_eq!(next_word_start(text, &KeywordClass::default()), expected);
	}

	#[test]
	fn iskeyword_changes_boundaries() {
		let kw = KeywordClass::parse("@,48-57,_,.");
		assert_eq!(word_before("foo.bar", &kw), 7);
	}
}
