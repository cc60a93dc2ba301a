use clap::Parser;
use std::process::ExitCode;

use langkeys::cli::{handle_error, init_logging, Args, CliConfig, CliUtils};
use langkeys::report::write_report;
use langkeys::{CompareResult, ComparisonEngine};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version print to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose, args.quiet);
    CliUtils::configure_colors();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Run one comparison; returns whether both files have the same keys
fn run(args: Args) -> CompareResult<bool> {
    let config = CliConfig::from_args(args)?;
    let engine = ComparisonEngine::new(config.compare_config.clone());

    let spinner = CliUtils::create_spinner("Comparing keys...", config.is_quiet());
    let outcome = engine.compare_sources(&config.source_a, &config.source_b);
    spinner.finish_and_clear();
    let outcome = outcome?;

    let report = outcome.render(config.compare_config.format)?;
    if !config.is_quiet() {
        println!("{}", report);
    }

    if let Some(path) = config.output_path() {
        match write_report(path, &report) {
            Ok(()) => {
                CliUtils::show_success(&format!("Report saved to: {}", path.display()), config.is_quiet())
            }
            Err(e) => CliUtils::show_warning(&format!(
                "Could not save report to '{}': {}",
                path.display(),
                e.source_message()
            )),
        }
    }

    tracing::debug!(
        identical = outcome.is_identical(),
        format = config.compare_config.format.as_str(),
        "comparison finished"
    );
    Ok(outcome.is_identical())
}
