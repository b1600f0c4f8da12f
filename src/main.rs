// pascheck: syntax checker for a small Pascal-like language

use std::error::Error;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pascheck::config::DEFAULT_MAX_NESTING;
use pascheck::{check, load_source, CheckerConfig, Dialect, Recovery, SourceError, Stream, Transcript};

/// Check the syntax of a Pascal-like program.
///
/// Trace lines go to stdout and diagnostics to stderr, in the order the
/// checker produced them.
#[derive(Parser, Debug)]
#[command(name = "pascheck", version)]
struct Args {
    /// Source file to check; reads standard input when omitted or `-`
    file: Option<PathBuf>,

    /// Language dialect
    #[arg(long, value_enum, default_value_t = DialectArg::Standard)]
    dialect: DialectArg,

    /// What to do with a token that does not match
    #[arg(long, value_enum, default_value_t = RecoveryArg::Swallow)]
    recovery: RecoveryArg,

    /// Deepest allowed nesting of commands, factors and procedures
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Exit with status 1 when any diagnostic was reported
    #[arg(long)]
    strict: bool,

    /// Suppress trace lines
    #[arg(short, long)]
    quiet: bool,

    /// Print a diagnostic count after the transcript
    #[arg(long)]
    summary: bool,

    /// Colour diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    Legacy,
    Standard,
    Extended,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Legacy => Dialect::Legacy,
            DialectArg::Standard => Dialect::Standard,
            DialectArg::Extended => Dialect::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecoveryArg {
    Swallow,
    Insert,
}

impl From<RecoveryArg> for Recovery {
    fn from(arg: RecoveryArg) -> Self {
        match arg {
            RecoveryArg::Swallow => Recovery::Swallow,
            RecoveryArg::Insert => Recovery::Insert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {}", err);
                cause = err.source();
            }
            return ExitCode::from(2);
        }
    };

    let config = CheckerConfig::new()
        .with_dialect(args.dialect.into())
        .with_recovery(args.recovery.into())
        .with_max_nesting(args.max_nesting);
    info!(?config, bytes = source.len(), "checking");

    let transcript = check(&source, config);
    info!(errors = transcript.error_count(), "done");

    match render(&transcript, &args) {
        Ok(()) => {}
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            return ExitCode::from(2);
        }
    }

    if args.strict && !transcript.is_clean() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// `RUST_LOG` wins over `-v`. Logs go to stderr and stay at `warn` by
/// default so they do not mix into the transcript.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(file: Option<&Path>) -> Result<String, SourceError> {
    match file {
        Some(path) if path != Path::new("-") => load_source(path),
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes).map_err(SourceError::Stdin)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn render(transcript: &Transcript, args: &Args) -> io::Result<()> {
    let styled = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_tty(),
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    for line in &transcript.lines {
        match line.stream() {
            Stream::Stdout => {
                if !args.quiet {
                    writeln!(out, "{}", line)?;
                }
            }
            Stream::Stderr => {
                // Keep the interleaving when both streams share a terminal
                out.flush()?;
                if styled {
                    writeln!(err, "{}", line.to_string().red())?;
                } else {
                    writeln!(err, "{}", line)?;
                }
            }
        }
    }
    out.flush()?;

    if args.summary {
        let count = transcript.error_count();
        let text = format!("{} diagnostic{}", count, if count == 1 { "" } else { "s" });
        if styled && count > 0 {
            writeln!(err, "{}", text.bold())?;
        } else {
            writeln!(err, "{}", text)?;
        }
    }

    Ok(())
}
