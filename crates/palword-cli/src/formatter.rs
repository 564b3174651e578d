use std::io::{self, Write};
use std::process::ExitCode;

use palword::WordCheck;

use crate::error::CliError;

pub enum OutputFormat {
    Text,
    Json,
}

/// Renders a check result as human-readable text or a single JSON line. Both
/// verdicts exit 0; only failures to produce a verdict carry an error code.
pub fn emit_result(report: WordCheck, format: OutputFormat) -> Result<ExitCode, CliError> {
    match format {
        OutputFormat::Text => print_text(&report)?,
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_text(report: &WordCheck) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    // Callers match on the exact bytes: "Yes" carries a trailing newline,
    // "No" does not.
    if report.palindrome {
        stdout.write_all(b"Yes\n")?;
    } else {
        stdout.write_all(b"No")?;
    }
    stdout.flush()?;
    Ok(())
}
