//! Lyndon factorization (Chen-Fox-Lyndon) using Duval's algorithm.
//!
//! Every non-empty byte string factors uniquely into a non-increasing
//! sequence of Lyndon words, each strictly smaller than all of its own
//! proper rotations. The words are reported as `(start, len)` views into
//! the input; nothing is copied.

/// A Lyndon word as a view into the factorized buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LyndonWord {
    /// Offset of the first byte of the word.
    pub start: usize,
    /// Number of bytes in the word (at least 1).
    pub len: usize,
}

impl LyndonWord {
    /// Create a new word view.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte range of the word within the factorized buffer.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// The word's bytes within `text`.
    pub fn bytes<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        &text[self.range()]
    }
}

/// Factorize `text` into Lyndon words.
///
/// Returns an empty list for empty input.
///
/// # Example
///
/// ```rust
/// use oxibwt_bwts::lyndon::factorize;
///
/// let text = b"banana";
/// let words: Vec<&[u8]> = factorize(text).iter().map(|w| w.bytes(text)).collect();
/// assert_eq!(words, [&b"b"[..], b"an", b"an", b"a"]);
/// ```
pub fn factorize(text: &[u8]) -> Vec<LyndonWord> {
    let mut words = Vec::new();
    factorize_into(text, &mut words);
    words
}

/// Factorize `text` into Lyndon words, reusing `words` for the output.
///
/// `words` is cleared before use.
///
/// # Algorithm
///
/// Duval's algorithm scans with two cursors: `k` walks the current candidate
/// period while `j` walks ahead of it.
/// 1. `text[k] < text[j]`: the whole scanned prefix is one Lyndon word; `k`
///    restarts at the candidate start
/// 2. `text[k] == text[j]`: the period repeats; advance both cursors
/// 3. `text[k] > text[j]` (or end of input): emit every complete copy of
///    the period `j - k` and restart on what is left
///
/// Each byte is compared a bounded number of times, so the whole pass is O(n).
pub fn factorize_into(text: &[u8], words: &mut Vec<LyndonWord>) {
    words.clear();
    let n = text.len();

    let mut i = 0;
    while i < n {
        let mut k = i;
        let mut j = i + 1;
        while j < n && text[k] <= text[j] {
            if text[k] < text[j] {
                k = i;
            } else {
                k += 1;
            }
            j += 1;
        }

        let period = j - k;
        while i <= k {
            words.push(LyndonWord::new(i, period));
            i += period;
        }
    }
}

/// Check whether `word` is a Lyndon word.
///
/// A Lyndon word is non-empty and strictly smaller than every one of its
/// proper rotations.
pub fn is_lyndon(word: &[u8]) -> bool {
    let n = word.len();
    if n == 0 {
        return false;
    }
    (1..n).all(|r| {
        let rotated = word[r..].iter().chain(&word[..r]);
        word.iter().lt(rotated)
    })
}
