//! Key and keystroke primitives shared by the keymap and prompt crates.

/// Single keypress representation and textual key notation.
pub mod key;
/// Ordered key sequences and their tokenizer.
pub mod keystroke;
/// Leader key configuration used by `<Leader>` notation.
pub mod leader;

pub use key::{CTRL_KEY, CTRL_SHIFT_KEY, Key, KeyCode, MARKER, META_KEY};
pub use keystroke::Keystroke;
pub use leader::Leaders;
