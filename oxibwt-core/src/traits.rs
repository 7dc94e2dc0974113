//! Core traits for block transforms.
//!
//! A block transform permutes a fully materialized buffer in place. The
//! caller hands over exclusive access for the duration of the call, so no
//! other reader can observe the buffer half-transformed.

use crate::buffer::copy_into;
use crate::error::Result;

/// A forward block transform.
pub trait BlockEncoder {
    /// Transform `block` in place.
    ///
    /// An empty block is left untouched.
    fn encode_block(&mut self, block: &mut [u8]) -> Result<()>;

    /// Transform a copy of `data` and return it (convenience method).
    fn encode_to_vec(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        copy_into(&mut output, data, "output")?;
        self.encode_block(&mut output)?;
        Ok(output)
    }
}

/// An inverse block transform.
pub trait BlockDecoder {
    /// Reverse the transform of `block` in place.
    ///
    /// Only blocks produced by the matching encoder decode to anything
    /// meaningful. Other input still yields a permutation of its bytes.
    fn decode_block(&mut self, block: &mut [u8]) -> Result<()>;

    /// Reverse the transform of a copy of `data` and return it (convenience method).
    fn decode_to_vec(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        copy_into(&mut output, data, "output")?;
        self.decode_block(&mut output)?;
        Ok(output)
    }
}
