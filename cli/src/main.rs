//! textstat CLI - readability statistics for text and Word documents
//!
//! Reads a file (or stdin) and prints word, sentence and readability metrics.

use clap::{Parser, ValueEnum};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use textstat::render::{JsonFormat, OutputFormat, RenderOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Readability statistics for plain text and Word documents
#[derive(Parser)]
#[command(
    name = "textstat",
    author = "iyulab",
    version,
    about = "Compute readability statistics for text",
    long_about = "textstat - word, sentence and syllable counts with Flesch-Kincaid,\n\
                  Gunning Fog and SMOG readability scores.\n\n\
                  Reads plain text from --file or standard input. DOCX files are\n\
                  unpacked before analysis."
)]
struct Cli {
    /// Input file path (default: stdin)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Report layout
    #[arg(long, default_value = "table")]
    format: Format,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// Decimal places for averages and scores
    #[arg(long, default_value = "2")]
    precision: usize,

    /// Also list the N most frequent words
    #[arg(long, default_value = "0")]
    top: usize,

    /// Log extraction and analysis steps to stderr (adds `textstat=debug` to RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Report layout
#[derive(Clone, ValueEnum)]
enum Format {
    /// Aligned metric / value / interpretation table
    Table,
    /// One metric per line
    Lines,
    /// JSON object
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Lines => OutputFormat::Lines,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Filter from `RUST_LOG` (default `textstat=warn`); `--verbose` layers
/// `textstat=debug` on top of either.
fn env_filter(verbose: bool) -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "textstat=warn".into());
    if verbose {
        if let Ok(directive) = "textstat=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &cli.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            textstat::load_text(path)?
        }
        None => {
            tracing::debug!("reading standard input");
            textstat::read_lines(io::stdin().lock())?
        }
    };

    let stats = textstat::analyze_with_top(&text, cli.top);

    let json_format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let options = RenderOptions::new()
        .with_format(cli.format.into())
        .with_precision(cli.precision)
        .with_json_format(json_format);

    let report = textstat::render::render(&stats, &options)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", report)?;
    if !report.ends_with('\n') {
        writeln!(handle)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["textstat"]).unwrap();
        assert!(cli.file.is_none());
        assert!(matches!(cli.format, Format::Table));
        assert_eq!(cli.precision, 2);
        assert_eq!(cli.top, 0);
    }

    #[test]
    fn test_cli_file_and_format() {
        let cli = Cli::try_parse_from([
            "textstat", "--file", "essay.txt", "--format", "json", "--compact",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("essay.txt")));
        assert!(matches!(cli.format, Format::Json));
        assert!(cli.compact);
    }

    #[test]
    fn test_missing_file_fails_before_analysis() {
        let cli = Cli::try_parse_from(["textstat", "--file", "/nonexistent/essay.txt"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<textstat::Error>(),
            Some(textstat::Error::Io(_))
        ));
    }

    #[test]
    fn test_missing_docx_reports_archive_error() {
        let cli = Cli::try_parse_from(["textstat", "--file", "/nonexistent/report.docx"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<textstat::Error>(),
            Some(textstat::Error::ArchiveOpen(_))
        ));
        assert!(err.to_string().starts_with("Failed to open archive: "));
    }

    #[test]
    fn test_verbose_adds_debug_directive() {
        assert!(env_filter(true).to_string().contains("textstat=debug"));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["textstat", "--format", "xml"]).is_err());
    }
}
