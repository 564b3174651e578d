use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};

use crate::check;
use crate::error::CliError;
use crate::formatter::{OutputFormat, emit_result};

const NAME: &str = "palword";

pub fn run() -> ExitCode {
    init_tracing();
    match run_cli(std::env::args()) {
        Ok(code) => code,
        Err(err) => {
            err.print();
            err.exit_code()
        }
    }
}

/// Parses CLI arguments and runs the palindrome check. Returns a POSIX
/// `sysexits`-compatible `ExitCode` so automation can react deterministically.
pub fn run_cli<I, S>(args: I) -> Result<ExitCode, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let command = build_cli();
    let matches = command.try_get_matches_from(args)?;

    let output = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let word_arg = matches.get_one::<String>("word").cloned();
    let verbose = matches.get_flag("verbose");

    // The prompt belongs to the interactive surface only; argument input and
    // JSON output both imply a non-interactive caller.
    let prompt = word_arg.is_none() && matches!(output, OutputFormat::Text);

    let report = check::run(word_arg, prompt, verbose)?;
    emit_result(report, output)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Defines the root `clap::Command`. There are no subcommands: the tool does
/// exactly one thing per run.
fn build_cli() -> Command {
    Command::new(NAME)
        .about("Check whether a word is a palindrome")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("word")
                .value_name("WORD")
                .help("Word to check. When omitted, one word is read from standard input."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the check result as a single JSON line instead of Yes/No."),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Emit additional logging about input handling."),
        )
}
