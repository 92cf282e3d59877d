//! # CLI Layer
//!
//! The interactive client for the address book. It is the only place that
//! reads stdin, writes stdout/stderr or decides the process exit code.
//!
//! ## Session
//!
//! 1. Parse flags, set up logging, resolve the data directory
//! 2. Load the snapshot through [`addressbook::init::initialize`]
//! 3. Read lines until `exit`/`close` (which saves) or end of input (which does not),
//!    printing each reply
//!
//! Blank lines are skipped. The prompt is only shown when stdin is a terminal,
//! which keeps piped sessions' output to the replies themselves.

mod args;
mod print;

use addressbook::api::goodbye;
use addressbook::error::{BookError, Result};
use addressbook::init::{initialize, resolve_data_dir, HOME_ENV};
use args::Cli;
use clap::Parser;
use print::print_result;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_home = std::env::var(HOME_ENV).ok();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), env_home.as_deref())?;
    let mut ctx = initialize(data_dir, cli.file.as_deref())?;
    tracing::debug!(
        data_dir = %ctx.data_dir.display(),
        contacts = ctx.api.book().len(),
        "session started"
    );

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    println!("Welcome to the assistant bot!");
    println!("Type 'hello' to start or 'help' to see all commands.");

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", ctx.config.prompt);
            io::stdout().flush().map_err(BookError::Io)?;
        }

        let Some(line) = lines.next() else {
            tracing::debug!("end of input, leaving without saving");
            print_result(&goodbye());
            return Ok(());
        };
        let line = line.map_err(BookError::Io)?;

        if let Some(reply) = ctx.api.execute(&line) {
            print_result(&reply.result);
            if reply.exit {
                return Ok(());
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
