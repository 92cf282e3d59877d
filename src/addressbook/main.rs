//! The `addressbook` binary: a thin shell around [`cli::run`].
//!
//! Everything user-facing (flags, prompt, colors, exit code) lives in `cli/`;
//! the contact logic itself is in the `addressbook` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
