//! Forward transform.

use crate::lyndon::{LyndonWord, factorize_into};
use crate::rotation::{Rotation, catalog_into};
use crate::sort::par_sort;
use oxibwt_core::buffer::{copy_into, reserve_exact, resize_with_fill};
use oxibwt_core::{BlockEncoder, Result, TransformConfig};

/// Placeholder used to size the merge scratch buffer.
const EMPTY_ROTATION: Rotation = Rotation {
    start: 0,
    len: 1,
    offset: 0,
};

/// Forward sentinel-free BWT with reusable working buffers.
///
/// Every buffer grows to the largest block seen and is reused by later
/// calls, so encoding many blocks of similar size allocates only once.
#[derive(Debug)]
pub struct BwtsEncoder {
    config: TransformConfig,
    /// Working copy of the block being transformed.
    text: Vec<u8>,
    /// Lyndon factorization of `text`.
    words: Vec<LyndonWord>,
    /// One rotation per byte of `text`.
    rotations: Vec<Rotation>,
    /// Merge space for the rotation sort.
    scratch: Vec<Rotation>,
}

impl BwtsEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            text: Vec::new(),
            words: Vec::new(),
            rotations: Vec::new(),
            scratch: Vec::new(),
        })
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Lyndon factorization of the most recently encoded block.
    pub fn words(&self) -> &[LyndonWord] {
        &self.words
    }

    /// Transform `block` in place.
    ///
    /// # Algorithm
    ///
    /// 1. Copy the block into the working buffer
    /// 2. Factorize the copy into Lyndon words
    /// 3. List every rotation of every word
    /// 4. Sort the rotations in cyclic order
    /// 5. Write each sorted rotation's preceding byte back into `block`
    ///
    /// The output is a permutation of the input bytes. An empty block is
    /// left untouched.
    pub fn encode_in_place(&mut self, block: &mut [u8]) -> Result<()> {
        let n = block.len();
        if n == 0 {
            return Ok(());
        }

        copy_into(&mut self.text, block, "text")?;

        // A factorization has at most one word per byte.
        reserve_exact(&mut self.words, n, "words")?;
        factorize_into(&self.text, &mut self.words);

        reserve_exact(&mut self.rotations, n, "rotations")?;
        catalog_into(&self.words, &mut self.rotations);

        let scratch_len = if n < self.config.sequential_threshold {
            0
        } else {
            n
        };
        resize_with_fill(&mut self.scratch, scratch_len, EMPTY_ROTATION, "scratch")?;

        log::debug!(
            "encoding {} bytes: {} Lyndon words, {} sort",
            n,
            self.words.len(),
            if scratch_len == 0 {
                "sequential"
            } else if self.config.parallel {
                "fork-join"
            } else {
                "single-threaded split"
            }
        );

        par_sort(&self.text, &mut self.rotations, &mut self.scratch, &self.config)?;

        for (out, rotation) in block.iter_mut().zip(&self.rotations) {
            *out = rotation.preceding(&self.text);
        }
        Ok(())
    }

    /// Transform a copy of `data` and return it.
    pub fn encode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.encode_to_vec(data)
    }
}

impl Default for BwtsEncoder {
    fn default() -> Self {
        Self {
            config: TransformConfig::DEFAULT,
            text: Vec::new(),
            words: Vec::new(),
            rotations: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl BlockEncoder for BwtsEncoder {
    fn encode_block(&mut self, block: &mut [u8]) -> Result<()> {
        self.encode_in_place(block)
    }
}

/// Apply the forward transform to `data` with the default configuration.
///
/// # Example
///
/// ```rust
/// use oxibwt_bwts::encode;
///
/// assert_eq!(encode(b"abab").unwrap(), b"bbaa");
/// ```
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    BwtsEncoder::default().encode(data)
}

/// Apply the forward transform to `block` in place with the default configuration.
pub fn encode_in_place(block: &mut [u8]) -> Result<()> {
    BwtsEncoder::default().encode_in_place(block)
}

/// Apply the forward transform to `data` with the given configuration.
pub fn encode_with_config(data: &[u8], config: TransformConfig) -> Result<Vec<u8>> {
    BwtsEncoder::new(config)?.encode(data)
}
