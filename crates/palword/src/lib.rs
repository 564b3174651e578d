pub mod check;
pub mod error;
pub mod report;
pub mod token;

pub use check::is_palindrome;
pub use error::PalwordError;
pub use report::WordCheck;
pub use token::{MAX_WORD_LEN, read_token};
