use std::io::{self, Write};

use palword::{MAX_WORD_LEN, PalwordError, WordCheck, read_token};

use crate::error::CliError;

const PROMPT: &str = "Enter a word: ";

/// Runs one check: takes the word from the argument when given, otherwise
/// prompts and reads the first whitespace-delimited token from stdin. The
/// same length limit applies to both sources.
pub fn run(word_arg: Option<String>, prompt: bool, verbose: bool) -> Result<WordCheck, CliError> {
    let word = match word_arg {
        Some(word) => {
            if word.len() > MAX_WORD_LEN {
                return Err(PalwordError::WordTooLong {
                    limit: MAX_WORD_LEN,
                }
                .into());
            }
            if verbose {
                tracing::info!(len = word.len(), "checking word from argument");
            }
            word.into_bytes()
        }
        None => {
            if prompt {
                let mut stdout = io::stdout().lock();
                stdout.write_all(PROMPT.as_bytes())?;
                stdout.flush()?;
            }
            let word = read_token(io::stdin().lock(), MAX_WORD_LEN)?;
            if verbose {
                tracing::info!(len = word.len(), limit = MAX_WORD_LEN, "read word from stdin");
            }
            word
        }
    };

    let report = WordCheck::evaluate(&word);
    tracing::debug!(word = %report.word, palindrome = report.palindrome, "word checked");
    Ok(report)
}
