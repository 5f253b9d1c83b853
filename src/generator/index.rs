//! Length/side word index
//!
//! Buckets the vocabulary by `(length, first letter)` and `(length, last letter)`.

use crate::core::{Side, Word};
use rustc_hash::FxHashMap;

/// Read-only lookup of words by length and boundary letter
///
/// Every word appears in exactly one start bucket and one end bucket, both
/// for its own length. Buckets keep the order in which words were indexed.
#[derive(Debug, Default)]
pub struct LengthSideIndex<'a> {
    start: FxHashMap<(usize, u8), Vec<&'a Word>>,
    end: FxHashMap<(usize, u8), Vec<&'a Word>>,
}

impl<'a> LengthSideIndex<'a> {
    /// Index every word of `words`
    #[must_use]
    pub fn build(words: &'a [Word]) -> Self {
        let mut index = Self::default();
        for word in words {
            let len = word.len();
            index.start.entry((len, word.first())).or_default().push(word);
            index.end.entry((len, word.last())).or_default().push(word);
        }
        index
    }

    /// Words of length `len` with `bound` at `side`
    ///
    /// Returns an empty slice when no word matches.
    #[must_use]
    pub fn bucket(&self, len: usize, side: Side, bound: u8) -> &[&'a Word] {
        let map = match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        };
        map.get(&(len, bound)).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn texts<'w>(bucket: &[&'w Word]) -> Vec<&'w str> {
        bucket.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn buckets_by_first_and_last_letter() {
        let vocab = words(&["CRANE", "CRATE", "CRUST", "TRUST"]);
        let index = LengthSideIndex::build(&vocab);

        assert_eq!(
            texts(index.bucket(5, Side::Start, b'C')),
            ["CRANE", "CRATE", "CRUST"]
        );
        assert_eq!(texts(index.bucket(5, Side::Start, b'T')), ["TRUST"]);
        assert_eq!(texts(index.bucket(5, Side::End, b'E')), ["CRANE", "CRATE"]);
        assert_eq!(texts(index.bucket(5, Side::End, b'T')), ["CRUST", "TRUST"]);
    }

    #[test]
    fn buckets_are_length_specific() {
        let vocab = words(&["CRANE", "CRANES"]);
        let index = LengthSideIndex::build(&vocab);

        assert_eq!(texts(index.bucket(5, Side::Start, b'C')), ["CRANE"]);
        assert_eq!(texts(index.bucket(6, Side::Start, b'C')), ["CRANES"]);
        assert!(index.bucket(7, Side::Start, b'C').is_empty());
    }

    #[test]
    fn missing_bucket_is_empty() {
        let vocab = words(&["CRANE"]);
        let index = LengthSideIndex::build(&vocab);
        assert!(index.bucket(5, Side::End, b'Z').is_empty());
    }

    #[test]
    fn each_word_lands_once_per_side() {
        let vocab = words(&["LEVEL", "RADAR", "CRANE", "SLATE", "ABBEY"]);
        let index = LengthSideIndex::build(&vocab);

        for side in Side::ALL {
            let total: usize = crate::core::ALPHABET
                .iter()
                .map(|&letter| index.bucket(5, side, letter).len())
                .sum();
            assert_eq!(total, vocab.len());
        }
        assert_eq!(texts(index.bucket(5, Side::End, b'L')), ["LEVEL"]);
        assert_eq!(texts(index.bucket(5, Side::End, b'E')), ["CRANE", "SLATE"]);
    }
}
