// crates/cli/src/config.rs
use crate::args::Args;
pub use count_text_engine::config::{Config, ConfigBuilder};
use count_text_engine::encoding::EncodingProfile;
use count_text_engine::options::CountMode;
use count_text_engine::source::Source;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mode = if args.bytes {
            CountMode::Bytes
        } else if args.lines {
            CountMode::Lines
        } else if args.words {
            CountMode::Words
        } else if args.chars {
            CountMode::Chars
        } else {
            CountMode::Standard
        };

        let sources = if args.paths.is_empty() {
            vec![Source::Stdin]
        } else {
            args.paths.into_iter().map(Source::File).collect()
        };

        ConfigBuilder::default()
            .sources(sources)
            .mode(mode)
            .encoding(EncodingProfile::from_env())
            .build()
            .expect("Failed to build config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_for(argv: &[&str]) -> Config {
        Config::from(crate::args::Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn absent_flags_select_standard_mode() {
        let config = config_for(&["count_text", "a.txt"]);
        assert_eq!(config.mode, CountMode::Standard);
    }

    #[test]
    fn each_flag_selects_its_mode() {
        assert_eq!(config_for(&["count_text", "-c"]).mode, CountMode::Bytes);
        assert_eq!(config_for(&["count_text", "-l"]).mode, CountMode::Lines);
        assert_eq!(config_for(&["count_text", "-w"]).mode, CountMode::Words);
        assert_eq!(config_for(&["count_text", "-m"]).mode, CountMode::Chars);
    }

    #[test]
    fn no_paths_reads_standard_input() {
        let config = config_for(&["count_text"]);
        assert_eq!(config.sources.len(), 1);
        assert!(matches!(config.sources[0], Source::Stdin));
    }

    #[test]
    fn paths_become_file_sources_in_order() {
        let config = config_for(&["count_text", "one.txt", "two.txt"]);
        let labels: Vec<_> = config.sources.iter().map(Source::label).collect();
        assert_eq!(labels, ["one.txt", "two.txt"]);
    }
}
