//! Inverse transform.
//!
//! The inverse needs nothing but the transformed bytes. Ranking each byte
//! among equal bytes (`minor`) and among smaller bytes (`base`) gives the
//! last-to-first (LF) mapping, a permutation of positions whose cycles are
//! exactly the Lyndon words of the original factorization. Walking every
//! cycle and writing from the back of the buffer reproduces the input.

use oxibwt_core::buffer::{copy_into, reserve_exact};
use oxibwt_core::{BlockDecoder, Result};

/// Marks a position already written by a cycle walk.
const CONSUMED: usize = usize::MAX;

/// Rank tables for the LF mapping.
#[derive(Debug, Clone)]
pub struct RankTables {
    /// `minor[i]` is the number of occurrences of `data[i]` in `data[..i]`.
    pub minor: Vec<usize>,
    /// `base[v]` is the number of bytes in `data` strictly less than `v`.
    pub base: [usize; 256],
}

impl RankTables {
    /// Build rank tables for `data`.
    pub fn build(data: &[u8]) -> Result<Self> {
        let mut tables = Self::default();
        tables.rebuild(data)?;
        Ok(tables)
    }

    /// Rebuild the tables for `data`, reusing the `minor` allocation.
    pub fn rebuild(&mut self, data: &[u8]) -> Result<()> {
        reserve_exact(&mut self.minor, data.len(), "minor")?;

        let mut counts = [0usize; 256];
        for &byte in data {
            let count = &mut counts[byte as usize];
            self.minor.push(*count);
            *count += 1;
        }

        let mut total = 0;
        for (base, count) in self.base.iter_mut().zip(counts) {
            *base = total;
            total += count;
        }
        Ok(())
    }

    /// The LF mapping: the position holding the byte that precedes `data[i]`.
    #[inline]
    pub fn lf(&self, data: &[u8], i: usize) -> usize {
        self.base[data[i] as usize] + self.minor[i]
    }
}

impl Default for RankTables {
    fn default() -> Self {
        Self {
            minor: Vec::new(),
            base: [0; 256],
        }
    }
}

/// Inverse sentinel-free BWT with reusable working buffers.
#[derive(Debug, Default)]
pub struct BwtsDecoder {
    /// Copy of the transformed block.
    input: Vec<u8>,
    ranks: RankTables,
}

impl BwtsDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reverse the transform of `block` in place.
    ///
    /// # Algorithm
    ///
    /// 1. Copy the block aside and build [`RankTables`] for it
    /// 2. From each position not yet consumed, follow the LF mapping until the
    ///    cycle closes, writing bytes from the end of `block` backwards
    ///
    /// Blocks not produced by the forward transform still decode without
    /// error into some permutation of their bytes.
    pub fn decode_in_place(&mut self, block: &mut [u8]) -> Result<()> {
        let n = block.len();
        if n == 0 {
            return Ok(());
        }

        copy_into(&mut self.input, block, "input")?;
        self.ranks.rebuild(&self.input)?;

        let input = &self.input;
        let ranks = &mut self.ranks;
        let mut cursor = n;
        let mut cycles = 0usize;
        for start in 0..n {
            if ranks.minor[start] == CONSUMED {
                continue;
            }
            cycles += 1;
            let mut k = start;
            while ranks.minor[k] != CONSUMED {
                cursor -= 1;
                block[cursor] = input[k];
                let next = ranks.lf(input, k);
                ranks.minor[k] = CONSUMED;
                k = next;
            }
        }
        debug_assert_eq!(cursor, 0);

        log::debug!("decoded {} bytes from {} LF cycles", n, cycles);
        Ok(())
    }

    /// Reverse the transform of a copy of `data` and return it.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode_to_vec(data)
    }
}

impl BlockDecoder for BwtsDecoder {
    fn decode_block(&mut self, block: &mut [u8]) -> Result<()> {
        self.decode_in_place(block)
    }
}

/// Apply the inverse transform to `data`.
///
/// # Example
///
/// ```rust
/// use oxibwt_bwts::decode;
///
/// assert_eq!(decode(b"bbaa").unwrap(), b"abab");
/// ```
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    BwtsDecoder::new().decode(data)
}

/// Apply the inverse transform to `block` in place.
pub fn decode_in_place(block: &mut [u8]) -> Result<()> {
    BwtsDecoder::new().decode_in_place(block)
}
