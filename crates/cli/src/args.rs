// crates/cli/src/args.rs
use clap::{ArgGroup, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_text",
    version = crate::VERSION,
    about = "Count lines, words, bytes and characters in files or standard input",
    // The four count selectors are mutually exclusive.
    group(
        ArgGroup::new("count_mode")
            .args(&["bytes", "lines", "words", "chars"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// Print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// Print the character counts
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// Files to process; standard input is read when none are given
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_parse_to_defaults() {
        let args = Args::try_parse_from(["count_text", "a.txt", "b.txt"]).unwrap();
        assert!(!args.bytes && !args.lines && !args.words && !args.chars);
        assert_eq!(args.paths.len(), 2);
    }

    #[test]
    fn count_flags_are_mutually_exclusive() {
        assert!(Args::try_parse_from(["count_text", "-c", "-l"]).is_err());
        assert!(Args::try_parse_from(["count_text", "-w", "-m", "f"]).is_err());
        assert!(Args::try_parse_from(["count_text", "-m", "f"]).is_ok());
    }
}
