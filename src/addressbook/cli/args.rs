use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", version)]
#[command(about = "Command-line address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and config.json
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Snapshot file name (overrides config.json)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["addressbook"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli =
            Cli::try_parse_from(["addressbook", "-d", "/tmp/book", "--file", "x.json", "-v"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/book")));
        assert_eq!(cli.file.as_deref(), Some("x.json"));
        assert!(cli.verbose);
    }
}
