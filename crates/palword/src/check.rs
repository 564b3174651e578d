/// Returns `true` when `word` reads identically forward and backward.
///
/// Comparison is exact byte equality: no case folding and no Unicode
/// normalization, so `"Aa"` is not a palindrome. Empty and single-byte
/// words are palindromes. Two indices converge from both ends; the first
/// mismatch short-circuits to `false`.
pub fn is_palindrome(word: &[u8]) -> bool {
    if word.is_empty() {
        return true;
    }
    let mut start = 0;
    let mut end = word.len() - 1;
    while start < end {
        if word[start] != word[end] {
            return false;
        }
        start += 1;
        end -= 1;
    }
    true
}
