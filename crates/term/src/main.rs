//! `prompter` reads one line in the terminal with editor-style mappings.
//!
//! The accepted text is printed on stdout; the prompt itself is drawn on
//! stderr. Exit status is 0 on accept, 1 on cancel and 2 on error.

mod cli;
mod config;
mod digraphs;
mod history;
mod host;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use prompter_host::OptionAccess;
use prompter_keymap::load_rules;
use prompter_prompt::{Prompt, Status};
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::host::TermHost;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	setup_tracing(cli.log_file.as_deref());

	let config = Config::load_or_default(cli.config.as_deref())?;
	let extra = match &cli.keymap {
		Some(path) => load_rules(path)?,
		None => Vec::new(),
	};
	let mut prompt_config = config.prompt.clone();
	cli.apply(&mut prompt_config);

	let history_path = if cli.no_history { None } else { config.host.history_path() };
	let history = match &history_path {
		Some(path) => HistoryStore::load(path, config.host.history_size)?,
		None => HistoryStore::new(config.host.history_size),
	};

	let mut host = TermHost::stderr(config.host.clone(), history);
	let keymap = config.keymap(&extra, &host.leaders())?;
	let (status, text) = {
		let mut prompt = Prompt::builder()
			.config(prompt_config)
			.keymap(keymap)
			.text(cli.text.clone())
			.build(&mut host);
		let status = prompt.start()?;
		(status, prompt.text().to_string())
	};
	info!(?status, "session finished");

	if let Some(path) = &history_path {
		host.history().save(path)?;
	}
	drop(host);

	Ok(match status {
		Status::Accept => {
			println!("{text}");
			ExitCode::SUCCESS
		}
		Status::Cancel => ExitCode::from(1),
		Status::Progress | Status::Error => ExitCode::from(2),
	})
}

fn setup_tracing(log_file: Option<&Path>) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	// The terminal is in raw mode while the prompt runs, so logs only go to a file.
	let Some(path) = log_file else {
		return;
	};
	let file = match OpenOptions::new().create(true).append(true).open(path) {
		Ok(file) => file,
		Err(err) => {
			eprintln!("cannot open log file {}: {err}", path.display());
			return;
		}
	};

	let filter = EnvFilter::try_from_env("PROMPTER_LOG").unwrap_or_else(|_| EnvFilter::new("prompter=debug,warn"));

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry().with(filter).with(file_layer).init();

	info!(path = %path.display(), "tracing initialized");
}
