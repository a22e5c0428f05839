//! Named special keys (`:help key-notation`) and their internal codes.
//!
//! Codes follow the host editor's internal encoding: a plain character code, or a
//! three-byte `0x80 b1 b2` termcap sequence.

use super::KeyCode;

/// Code stored in the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Code {
	Char(u32),
	Bytes(&'static [u8]),
}

impl Code {
	pub(crate) fn to_key_code(self) -> KeyCode {
		match self {
			Code::Char(c) => KeyCode::Char(c),
			Code::Bytes(b) => KeyCode::Bytes(b.into()),
		}
	}

	fn matches(self, code: &KeyCode) -> bool {
		match (self, code) {
			(Code::Char(a), KeyCode::Char(b)) => a == *b,
			(Code::Bytes(a), KeyCode::Bytes(b)) => a == b.as_slice(),
			_ => false,
		}
	}
}

/// Canonical names. Every code appears once so names can be recovered from codes.
pub(crate) const SPECIAL_KEYS: &[(&str, Code)] = &[
	("C-@", Code::Bytes(b"\x80\xffX")),
	("TAB", Code::Char(9)),
	("S-TAB", Code::Bytes(b"\x80kB")),
	("NL", Code::Char(10)),
	("FF", Code::Char(12)),
	("CR", Code::Char(13)),
	("ESC", Code::Char(27)),
	("SPACE", Code::Char(32)),
	("LT", Code::Char(60)),
	("BSLASH", Code::Char(92)),
	("BAR", Code::Char(124)),
	("BS", Code::Bytes(b"\x80kb")),
	("DEL", Code::Bytes(b"\x80kD")),
	("CSI", Code::Char(0x9B)),
	("XCSI", Code::Bytes(b"\x80\xfdP")),
	("UP", Code::Bytes(b"\x80ku")),
	("DOWN", Code::Bytes(b"\x80kd")),
	("LEFT", Code::Bytes(b"\x80kl")),
	("RIGHT", Code::Bytes(b"\x80kr")),
	("S-UP", Code::Bytes(b"\x80\xfd\x04")),
	("S-DOWN", Code::Bytes(b"\x80\xfd\x05")),
	("S-LEFT", Code::Bytes(b"\x80#4")),
	("S-RIGHT", Code::Bytes(b"\x80%i")),
	("C-LEFT", Code::Bytes(b"\x80\xfdT")),
	("C-RIGHT", Code::Bytes(b"\x80\xfdU")),
	("F1", Code::Bytes(b"\x80k1")),
	("F2", Code::Bytes(b"\x80k2")),
	("F3", Code::Bytes(b"\x80k3")),
	("F4", Code::Bytes(b"\x80k4")),
	("F5", Code::Bytes(b"\x80k5")),
	("F6", Code::Bytes(b"\x80k6")),
	("F7", Code::Bytes(b"\x80k7")),
	("F8", Code::Bytes(b"\x80k8")),
	("F9", Code::Bytes(b"\x80k9")),
	("F10", Code::Bytes(b"\x80k;")),
	("F11", Code::Bytes(b"\x80F1")),
	("F12", Code::Bytes(b"\x80F2")),
	("S-F1", Code::Bytes(b"\x80\xfd\x06")),
	("S-F2", Code::Bytes(b"\x80\xfd\x07")),
	("S-F3", Code::Bytes(b"\x80\xfd\x08")),
	("S-F4", Code::Bytes(b"\x80\xfd\x09")),
	("S-F5", Code::Bytes(b"\x80\xfd\x0a")),
	("S-F6", Code::Bytes(b"\x80\xfd\x0b")),
	("S-F7", Code::Bytes(b"\x80\xfd\x0c")),
	("S-F8", Code::Bytes(b"\x80\xfd\x0d")),
	("S-F9", Code::Bytes(b"\x80\xfd\x0e")),
	("S-F10", Code::Bytes(b"\x80\xfd\x0f")),
	("S-F11", Code::Bytes(b"\x80\xfd\x10")),
	("S-F12", Code::Bytes(b"\x80\xfd\x11")),
	("HELP", Code::Bytes(b"\x80%1")),
	("UNDO", Code::Bytes(b"\x80&8")),
	("INSERT", Code::Bytes(b"\x80kI")),
	("HOME", Code::Bytes(b"\x80kh")),
	("END", Code::Bytes(b"\x80@7")),
	("PAGEUP", Code::Bytes(b"\x80kP")),
	("PAGEDOWN", Code::Bytes(b"\x80kN")),
	("S-HOME", Code::Bytes(b"\x80#2")),
	("S-END", Code::Bytes(b"\x80*7")),
	("S-INSERT", Code::Bytes(b"\x80#3")),
	("S-DEL", Code::Bytes(b"\x80*4")),
	("KHOME", Code::Bytes(b"\x80K1")),
	("KEND", Code::Bytes(b"\x80K4")),
	("KPAGEUP", Code::Bytes(b"\x80K3")),
	("KPAGEDOWN", Code::Bytes(b"\x80K5")),
	("KPLUS", Code::Bytes(b"\x80K6")),
	("KMINUS", Code::Bytes(b"\x80K7")),
	("KMULTIPLY", Code::Bytes(b"\x80K9")),
	("KDIVIDE", Code::Bytes(b"\x80K8")),
	("KENTER", Code::Bytes(b"\x80KA")),
	("KPOINT", Code::Bytes(b"\x80KB")),
	("K0", Code::Bytes(b"\x80KC")),
	("K1", Code::Bytes(b"\x80KD")),
	("K2", Code::Bytes(b"\x80KE")),
	("K3", Code::Bytes(b"\x80KF")),
	("K4", Code::Bytes(b"\x80KG")),
	("K5", Code::Bytes(b"\x80KH")),
	("K6", Code::Bytes(b"\x80KI")),
	("K7", Code::Bytes(b"\x80KJ")),
	("K8", Code::Bytes(b"\x80KK")),
	("K9", Code::Bytes(b"\x80KL")),
];

/// Alternative spellings; never used when representing a code.
pub(crate) const ALIASES: &[(&str, &str)] = &[
	("NUL", "NL"),
	("NOP", "NL"),
	("LF", "NL"),
	("RETURN", "CR"),
	("ENTER", "CR"),
	("DELETE", "DEL"),
	("INS", "INSERT"),
];

/// Looks up an uppercase key name, following aliases.
pub(crate) fn lookup(name: &[u8]) -> Option<KeyCode> {
	let canonical = ALIASES
		.iter()
		.find(|(alias, _)| alias.as_bytes() == name)
		.map_or(name, |(_, target)| target.as_bytes());
	SPECIAL_KEYS
		.iter()
		.find(|(n, _)| n.as_bytes() == canonical)
		.map(|(_, code)| code.to_key_code())
}

/// Returns the canonical name of a code, if it is a named special key.
pub(crate) fn name_of(code: &KeyCode) -> Option<&'static str> {
	SPECIAL_KEYS.iter().find(|(_, c)| c.matches(code)).map(|(name, _)| *name)
}
