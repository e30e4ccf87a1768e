// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
pub mod decoder;
pub mod encoding;
pub mod error;
pub mod options;
pub mod source;
pub mod stats;

use crate::config::Config;
use crate::stats::{RunResult, SourceReport};

/// Run the counting engine over every configured source.
///
/// Sources are processed sequentially, each to completion before the next
/// begins. A source that cannot be opened or read contributes an entry to
/// `RunResult::errors` and produces no report; the remaining sources are
/// still processed.
#[must_use]
pub fn run(config: &Config) -> RunResult {
    let mut result = RunResult::default();

    for source in &config.sources {
        match counter::count_source(source, &config.encoding, config.mode) {
            Ok(counts) => result.reports.push(SourceReport {
                label: source.label(),
                counts,
            }),
            Err(e) => result.errors.push((source.label(), e)),
        }
    }

    result
}
