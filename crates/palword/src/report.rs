use serde::Serialize;

use crate::check::is_palindrome;

/// Outcome of checking a single word.
#[derive(Clone, Debug, Serialize)]
pub struct WordCheck {
    pub word: String,
    pub palindrome: bool,
}

impl WordCheck {
    /// Runs the palindrome check over `word` and records the outcome.
    ///
    /// The check runs on the raw bytes; the recorded word is converted
    /// lossily for display and serialization.
    pub fn evaluate(word: &[u8]) -> Self {
        Self {
            word: String::from_utf8_lossy(word).into_owned(),
            palindrome: is_palindrome(word),
        }
    }
}
