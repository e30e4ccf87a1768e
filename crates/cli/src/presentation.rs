// crates/cli/src/presentation.rs
use count_text_engine::options::CountMode;
use count_text_engine::stats::SourceReport;

/// Print one row per counted source to stdout, in input order.
pub fn print_reports(reports: &[SourceReport], mode: CountMode) {
    for report in reports {
        println!("{}", render_report(report, mode));
    }
}

/// Project the requested counter subset into an output row.
///
/// Standard mode reports lines, words and bytes in that fixed order and
/// never characters; single-counter modes report just their counter. The
/// label always comes last, columns two-space separated.
#[must_use]
pub fn render_report(report: &SourceReport, mode: CountMode) -> String {
    let c = &report.counts;
    let columns: Vec<u64> = match mode {
        CountMode::Standard => vec![c.lines, c.words, c.bytes],
        CountMode::Lines => vec![c.lines],
        CountMode::Words => vec![c.words],
        CountMode::Bytes => vec![c.bytes],
        CountMode::Chars => vec![c.chars],
    };

    let mut row = columns
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("  ");
    row.push_str("  ");
    row.push_str(&report.label);
    row
}
