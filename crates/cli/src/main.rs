use clap::Parser;
use count_text_cli::args::Args;
use count_text_cli::config::Config;
use count_text_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    let result = count_text_engine::run(&config);

    for (label, err) in &result.errors {
        eprintln!("Error processing {label}: {err}");
    }

    presentation::print_reports(&result.reports, config.mode);

    if result.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
