//! Rotations of Lyndon words and their cyclic order.
//!
//! A [`Rotation`] names one cyclic shift of one Lyndon word without copying
//! any bytes. Two rotations are compared as infinite periodic streams, each
//! wrapping at its own word boundary, never at the buffer boundary. Because
//! every word of a Lyndon factorization is primitive, two rotations compare
//! equal only if they are the same shift of identical words.

use crate::lyndon::LyndonWord;
use std::cmp::Ordering;

/// A cyclic shift of a Lyndon word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Offset of the owning word in the buffer.
    pub start: usize,
    /// Length of the owning word.
    pub len: usize,
    /// Shift within the word, `0..len`.
    pub offset: usize,
}

impl Rotation {
    /// Create the rotation of `word` starting at `offset`.
    pub fn new(word: LyndonWord, offset: usize) -> Self {
        debug_assert!(offset < word.len);
        Self {
            start: word.start,
            len: word.len,
            offset,
        }
    }

    /// Bytes of the owning word.
    #[inline]
    pub fn word<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        &text[self.start..self.start + self.len]
    }

    /// The byte cyclically preceding the rotation's first byte.
    ///
    /// This is the byte the forward transform emits for the rotation.
    #[inline]
    pub fn preceding(&self, text: &[u8]) -> u8 {
        let prev = if self.offset == 0 {
            self.len - 1
        } else {
            self.offset - 1
        };
        text[self.start + prev]
    }

    /// Iterate over one full lap of the rotation.
    pub fn bytes<'a>(&self, text: &'a [u8]) -> impl Iterator<Item = u8> + use<'a> {
        let word = self.word(text);
        let (head, tail) = word.split_at(self.offset);
        tail.iter().chain(head).copied()
    }
}

/// Build the rotation collection for a factorization.
///
/// One rotation per byte of the factorized buffer, in word order and then
/// offset order. `rotations` is cleared first.
pub fn catalog_into(words: &[LyndonWord], rotations: &mut Vec<Rotation>) {
    rotations.clear();
    for &word in words {
        rotations.extend((0..word.len).map(|offset| Rotation::new(word, offset)));
    }
}

/// Build the rotation collection for a factorization.
pub fn catalog(words: &[LyndonWord]) -> Vec<Rotation> {
    let mut rotations = Vec::with_capacity(words.iter().map(|w| w.len).sum());
    catalog_into(words, &mut rotations);
    rotations
}

/// Compare two rotations of words in `text` as infinite periodic streams.
///
/// Both cursors advance in lock-step, each wrapping at its own word length.
/// The comparison stops at the first mismatch, or with [`Ordering::Equal`]
/// once both cursors are back at their starting offsets together, which
/// happens after `lcm(a.len, b.len)` steps.
///
/// Matching runs are compared a slice at a time rather than byte by byte.
pub fn compare(text: &[u8], a: &Rotation, b: &Rotation) -> Ordering {
    let wa = a.word(text);
    let wb = b.word(text);
    let lap = lcm(a.len, b.len);

    let (mut ia, mut ib) = (a.offset, b.offset);
    let mut steps = 0;
    while steps < lap {
        let run = (wa.len() - ia).min(wb.len() - ib).min(lap - steps);
        match wa[ia..ia + run].cmp(&wb[ib..ib + run]) {
            Ordering::Equal => {}
            other => return other,
        }
        steps += run;
        ia += run;
        ib += run;
        if ia == wa.len() {
            ia = 0;
        }
        if ib == wb.len() {
            ib = 0;
        }
    }
    Ordering::Equal
}

/// `a < b` under [`compare`].
#[inline]
pub fn less(text: &[u8], a: &Rotation, b: &Rotation) -> bool {
    compare(text, a, b) == Ordering::Less
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, saturating at `usize::MAX`.
fn lcm(a: usize, b: usize) -> usize {
    (a / gcd(a, b)).saturating_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyndon::factorize;

    fn rot(start: usize, len: usize, offset: usize) -> Rotation {
        Rotation::new(LyndonWord::new(start, len), offset)
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 7), 7);
        assert_eq!(lcm(5, 5), 5);
        assert_eq!(lcm(usize::MAX, 2), usize::MAX);
    }

    #[test]
    fn test_preceding_wraps() {
        let text = b"abc";
        assert_eq!(rot(0, 3, 0).preceding(text), b'c');
        assert_eq!(rot(0, 3, 1).preceding(text), b'a');
        assert_eq!(rot(0, 3, 2).preceding(text), b'b');
    }

    #[test]
    fn test_rotation_bytes() {
        let text = b"xxabcd";
        let r = rot(2, 4, 1);
        assert_eq!(r.bytes(text).collect::<Vec<_>>(), b"bcda");
    }

    #[test]
    fn test_catalog_order() {
        let text = b"abab";
        let rotations = catalog(&factorize(text));
        assert_eq!(
            rotations,
            vec![rot(0, 2, 0), rot(0, 2, 1), rot(2, 2, 0), rot(2, 2, 1)]
        );
    }

    #[test]
    fn test_catalog_count_matches_length() {
        let text = b"SIX.MIXED.PIXIES.SIFT.SIXTY.PIXIE.DUST.BOXES";
        assert_eq!(catalog(&factorize(text)).len(), text.len());
    }

    #[test]
    fn test_catalog_into_reuses_buffer() {
        let mut rotations = vec![rot(0, 1, 0); 10];
        catalog_into(&factorize(b"ba"), &mut rotations);
        assert_eq!(rotations, vec![rot(0, 1, 0), rot(1, 1, 0)]);
    }

    #[test]
    fn test_compare_same_word() {
        // "ab" at 0..2: "ab" < "ba"
        let text = b"ab";
        assert_eq!(compare(text, &rot(0, 2, 0), &rot(0, 2, 1)), Ordering::Less);
        assert_eq!(
            compare(text, &rot(0, 2, 1), &rot(0, 2, 0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_equal_words() {
        let text = b"abab";
        assert_eq!(compare(text, &rot(0, 2, 1), &rot(2, 2, 1)), Ordering::Equal);
    }

    #[test]
    fn test_compare_wraps_per_word() {
        // "b" repeated is "bbbb...", "ab" from offset 1 is "baba..."
        let text = b"bab";
        let single = rot(0, 1, 0);
        let pair = rot(1, 2, 1);
        assert_eq!(compare(text, &pair, &single), Ordering::Less);
        assert!(less(text, &pair, &single));
        assert!(!less(text, &single, &pair));
    }

    #[test]
    fn test_compare_distinct_lengths_equal_prefix() {
        // "aab" vs "ab": "aabaab..." < "ababab..."
        let text = b"abaab";
        let ab = rot(0, 2, 0);
        let aab = rot(2, 3, 0);
        assert_eq!(compare(text, &aab, &ab), Ordering::Less);
    }

    #[test]
    fn test_compare_is_reflexive() {
        let text = b"mississippi";
        for r in catalog(&factorize(text)) {
            assert_eq!(compare(text, &r, &r), Ordering::Equal);
        }
    }
}
