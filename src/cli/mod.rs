//! Command-line interface module

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::comparison::{CompareConfig, ReportFormat};
use crate::error::{CompareError, CompareResult};
use crate::parser::JsonSource;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "langkeys")]
#[command(about = "Compare the keys of two JSON language packs")]
#[command(version)]
#[command(after_help = "Examples:
  langkeys en.json zh.json
  langkeys en.json zh.json --output report.txt
  cat de.json | langkeys en.json -

Exits with status 0 when both files have the same keys, 1 otherwise.")]
pub struct Args {
    /// First JSON file (use - for standard input)
    pub file_a: String,

    /// Second JSON file (use - for standard input)
    pub file_b: String,

    /// Also save the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Compare keys case-insensitively (keys differing only by case are merged)
    #[arg(long)]
    pub ignore_case: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[value(name = "text", alias = "txt")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub compare_config: CompareConfig,
    pub source_a: JsonSource,
    pub source_b: JsonSource,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> CompareResult<Self> {
        let source_a = JsonSource::from_arg(&args.file_a);
        let source_b = JsonSource::from_arg(&args.file_b);
        if source_a == JsonSource::Stdin && source_b == JsonSource::Stdin {
            return Err(CompareError::configuration(
                "Only one input can be read from standard input",
            ));
        }

        let compare_config = CompareConfig::new()
            .with_ignore_case(args.ignore_case)
            .with_format(args.format.into());

        Ok(Self {
            args,
            compare_config,
            source_a,
            source_b,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.args.output.as_ref()
    }
}

/// Install the stderr log subscriber
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else if quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Turn terminal colors on or off for both output streams
    pub fn configure_colors() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        console::set_colors_enabled(!no_color && atty::is(atty::Stream::Stdout));
        console::set_colors_enabled_stderr(!no_color && atty::is(atty::Stream::Stderr));
    }

    /// Create a spinner shown on stderr while files are processed
    pub fn create_spinner(message: &str, quiet: bool) -> ProgressBar {
        if quiet || !atty::is(atty::Stream::Stderr) {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    /// Show a success message on stderr (if not in quiet mode)
    ///
    /// Stdout carries only the report, so it can be piped into other tools.
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("✓").green().for_stderr(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red().for_stderr(), message);
    }

    /// Show a warning message
    pub fn show_warning(message: &str) {
        eprintln!("{} {}", console::style("⚠").yellow().for_stderr(), message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &CompareError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        CompareError::NotFound { .. } => {
            eprintln!("\nTip: Check the path, or pass - to read JSON from standard input");
        }
        CompareError::Parse(_) => {
            eprintln!("\nTip: Look for a missing value, an unquoted key, or a trailing comma near the marked position");
        }
        CompareError::InvalidRoot { .. } => {
            eprintln!("\nTip: Language packs must be a JSON object such as {{\"key\": \"text\"}}");
        }
        _ => {}
    }

    eprintln!("\nTry 'langkeys --help' for usage information.");
}
