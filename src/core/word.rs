//! Vocabulary word representation
//!
//! A Word stores an uppercase A-Z string along with the set of its distinct letters.

use super::letter::LetterSet;
use std::fmt;

/// An uppercase, letters-only vocabulary word
///
/// The distinct-letter set is computed once at construction and backs every
/// containment check made during pattern generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Strip every character that is not an ASCII letter and uppercase the rest
///
/// # Examples
/// ```
/// use bound_patterns::core::sanitize;
///
/// assert_eq!(sanitize("don't"), "DONT");
/// assert_eq!(sanitize("Crème"), "CRME");
/// assert_eq!(sanitize("42"), "");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased; no other normalization happens here (see
    /// [`sanitize`] for the lenient path used when loading wordlists).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use bound_patterns::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterSet::from_bytes(text.as_bytes());
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First letter
    #[inline]
    #[must_use]
    pub fn first(&self) -> u8 {
        self.bytes()[0]
    }

    /// Last letter
    #[inline]
    #[must_use]
    pub fn last(&self) -> u8 {
        self.bytes()[self.len() - 1]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.bytes(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("crème"), Err(WordError::NonAscii)));
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("x-ray").is_err());
        assert!(Word::new("ice cream").is_err());
    }

    #[test]
    fn word_boundaries() {
        let word = Word::new("trust").unwrap();
        assert_eq!(word.first(), b'T');
        assert_eq!(word.last(), b'T');

        let single = Word::new("a").unwrap();
        assert_eq!(single.first(), b'A');
        assert_eq!(single.last(), b'A');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'c'));
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letters().len(), 4);
    }

    #[test]
    fn sanitize_strips_and_uppercases() {
        assert_eq!(sanitize("o'clock"), "OCLOCK");
        assert_eq!(sanitize("x-ray"), "XRAY");
        assert_eq!(sanitize("  tea  "), "TEA");
        assert_eq!(sanitize("naïve"), "NAVE");
        assert_eq!(sanitize("123"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
