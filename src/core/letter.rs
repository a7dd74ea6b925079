//! Letter normalization shared by words and guesses

/// Normalize a letter to its uppercase form
///
/// Characters whose uppercase mapping expands to several characters
/// (e.g. `'ß'`) are returned unchanged so that one guess always maps to
/// exactly one letter.
///
/// # Examples
/// ```
/// use hangman::core::normalize_letter;
///
/// assert_eq!(normalize_letter('j'), 'J');
/// assert_eq!(normalize_letter('é'), 'É');
/// assert_eq!(normalize_letter('ß'), 'ß');
/// ```
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Normalize every character of a word with [`normalize_letter`]
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.chars().map(normalize_letter).collect()
}

/// Whether a character may be proposed as a guess
#[inline]
#[must_use]
pub fn is_guessable(letter: char) -> bool {
    letter.is_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_uppercased() {
        assert_eq!(normalize_letter('a'), 'A');
        assert_eq!(normalize_letter('Z'), 'Z');
    }

    #[test]
    fn multi_char_uppercase_is_left_alone() {
        assert_eq!(normalize_letter('ß'), 'ß');
        assert_eq!(normalize_word("straße"), "STRAßE");
    }

    #[test]
    fn non_letters_are_not_guessable() {
        assert!(is_guessable('q'));
        assert!(is_guessable('É'));
        assert!(!is_guessable('3'));
        assert!(!is_guessable(' '));
        assert!(!is_guessable('-'));
    }
}
