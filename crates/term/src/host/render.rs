//! Drawing echo chunks on the terminal's current line.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use prompter_host::EchoChunk;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Replaces the current line with `chunks`, scrolled so the end stays visible.
pub fn draw_line(out: &mut impl Write, chunks: &[EchoChunk], width: usize) -> io::Result<()> {
	queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
	for chunk in fit_to_width(chunks, width) {
		queue_styled(out, &chunk)?;
	}
	out.flush()
}

/// Prints each line of `message` as an error, leaving the lines on screen.
pub fn draw_error(out: &mut impl Write, message: &str) -> io::Result<()> {
	queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
	for line in message.lines() {
		queue!(out, SetForegroundColor(Color::Red), Print(line), ResetColor, Print("\r\n"))?;
	}
	out.flush()
}

fn queue_styled(out: &mut impl Write, chunk: &EchoChunk) -> io::Result<()> {
	match chunk.group.as_ref() {
		"Question" | "MoreMsg" => queue!(out, SetForegroundColor(Color::Green))?,
		"WarningMsg" => queue!(out, SetForegroundColor(Color::Yellow))?,
		"ErrorMsg" => queue!(out, SetForegroundColor(Color::Red))?,
		"IncSearch" | "Cursor" | "Visual" => queue!(out, SetAttribute(Attribute::Reverse))?,
		_ => {}
	}
	queue!(out, Print(&chunk.text), SetAttribute(Attribute::Reset))
}

/// Drops leading columns until `chunks` fit in `width` with one column to spare.
pub fn fit_to_width(chunks: &[EchoChunk], width: usize) -> Vec<EchoChunk> {
	let total: usize = chunks.iter().map(|chunk| chunk.text.width()).sum();
	let mut excess = total.saturating_sub(width.saturating_sub(1));
	let mut fitted = Vec::with_capacity(chunks.len());
	for chunk in chunks {
		if excess == 0 {
			fitted.push(chunk.clone());
			continue;
		}
		let mut skipped = 0;
		let mut start = chunk.text.len();
		for (i, c) in chunk.text.char_indices() {
			if skipped >= excess {
				start = i;
				break;
			}
			skipped += c.width().unwrap_or(0);
		}
		excess = excess.saturating_sub(skipped);
		if start < chunk.text.len() {
			fitted.push(EchoChunk::new(chunk.group.clone(), &chunk.text[start..]));
		}
	}
	fitted
}
