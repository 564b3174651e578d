use std::io::BufRead;

use crate::error::PalwordError;

/// Longest word the CLI accepts, in bytes.
pub const MAX_WORD_LEN: usize = 4096;

/// Reads one whitespace-delimited token from `reader`.
///
/// Leading ASCII whitespace is skipped; the token ends at the next ASCII
/// whitespace byte or at end of input, and anything after it is left unread.
/// The token may not exceed `limit` bytes, and end of input before any token
/// byte is an error. The returned bytes are the raw input, not validated as
/// UTF-8.
pub fn read_token<R: BufRead>(mut reader: R, limit: usize) -> Result<Vec<u8>, PalwordError> {
    let mut word = Vec::new();
    loop {
        let (used, ended, overflowed) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut ended = false;
            let mut overflowed = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if word.is_empty() {
                        used += 1;
                        continue;
                    }
                    // The delimiter stays unread along with the rest of the
                    // stream.
                    ended = true;
                    break;
                }
                word.push(byte);
                used += 1;
                if word.len() > limit {
                    overflowed = true;
                    break;
                }
            }
            (used, ended, overflowed)
        };
        reader.consume(used);
        if overflowed {
            return Err(PalwordError::WordTooLong { limit });
        }
        if ended {
            break;
        }
    }

    if word.is_empty() {
        return Err(PalwordError::MissingWord);
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::read_token;
    use crate::error::PalwordError;

    #[test]
    fn reads_first_token() {
        let word = read_token(Cursor::new("racecar\n"), 16).unwrap();
        assert_eq!(word, b"racecar");
    }

    #[test]
    fn skips_leading_whitespace() {
        let word = read_token(Cursor::new(" \t\n hello world"), 16).unwrap();
        assert_eq!(word, b"hello");
    }

    #[test]
    fn stops_at_first_whitespace() {
        let word = read_token(Cursor::new("ab ba"), 16).unwrap();
        assert_eq!(word, b"ab");
    }

    #[test]
    fn token_ended_by_eof() {
        let word = read_token(Cursor::new("abba"), 16).unwrap();
        assert_eq!(word, b"abba");
    }

    #[test]
    fn empty_input_is_missing_word() {
        let err = read_token(Cursor::new(""), 16).unwrap_err();
        assert!(matches!(err, PalwordError::MissingWord));
    }

    #[test]
    fn whitespace_only_input_is_missing_word() {
        let err = read_token(Cursor::new("  \n\t  "), 16).unwrap_err();
        assert!(matches!(err, PalwordError::MissingWord));
    }

    #[test]
    fn token_at_the_limit_is_accepted() {
        let word = read_token(Cursor::new("abcd"), 4).unwrap();
        assert_eq!(word, b"abcd");
    }

    #[test]
    fn oversized_token_is_rejected() {
        let err = read_token(Cursor::new("abcde"), 4).unwrap_err();
        assert!(matches!(err, PalwordError::WordTooLong { limit: 4 }));
    }
}
