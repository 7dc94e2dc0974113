//! Sentinel-free Burrows-Wheeler Transform (BWTS) for OxiBWT.
//!
//! The classic BWT sorts the rotations of the whole block and needs either
//! an end marker or a stored origin index to be invertible. This variant
//! first factors the block into Lyndon words and sorts the rotations of
//! each word, compared as infinite periodic strings. The resulting order is
//! unambiguous even with repeated bytes, and the inverse needs nothing but
//! the transformed bytes themselves.
//!
//! The forward transform is a pipeline:
//! 1. Lyndon factorization - Duval's algorithm, O(n)
//! 2. Rotation catalog - one rotation per byte, no copying
//! 3. Rotation sort - fork-join merge sort in cyclic order
//! 4. Output - the byte preceding each sorted rotation
//!
//! The inverse transform follows the LF mapping built from two rank tables.
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_bwts::{decode, encode};
//!
//! let data = b"SIX.MIXED.PIXIES.SIFT.SIXTY.PIXIE.DUST.BOXES";
//! let encoded = encode(data).unwrap();
//! assert_eq!(encoded.len(), data.len());
//! assert_eq!(decode(&encoded).unwrap(), data);
//! ```
//!
//! Empty input is a no-op in both directions.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
pub mod lyndon;
pub mod rotation;
pub mod sort;

pub use decode::{BwtsDecoder, RankTables, decode, decode_in_place};
pub use encode::{BwtsEncoder, encode, encode_in_place, encode_with_config};
pub use lyndon::{LyndonWord, factorize};
pub use oxibwt_core::{BlockDecoder, BlockEncoder, OxiBwtError, Result, TransformConfig};

/// Default sequential sort threshold.
pub const DEFAULT_SEQUENTIAL_THRESHOLD: usize = TransformConfig::DEFAULT.sequential_threshold;

/// Check that `data` survives an encode/decode round trip.
///
/// Returns [`OxiBwtError::RoundTripMismatch`] with the first differing
/// offset when it does not.
pub fn verify_roundtrip(data: &[u8]) -> Result<()> {
    verify_roundtrip_with_config(data, TransformConfig::DEFAULT)
}

/// Check an encode/decode round trip using the given configuration.
pub fn verify_roundtrip_with_config(data: &[u8], config: TransformConfig) -> Result<()> {
    let encoded = BwtsEncoder::new(config)?.encode(data)?;
    let decoded = decode(&encoded)?;
    check_roundtrip(data, &decoded)
}

/// Compare a decoded buffer against the original input.
///
/// Returns [`OxiBwtError::RoundTripMismatch`] at the first differing offset,
/// or at the end of the shorter buffer when the lengths differ.
pub fn check_roundtrip(original: &[u8], decoded: &[u8]) -> Result<()> {
    match first_difference(original, decoded) {
        Some(offset) => Err(OxiBwtError::roundtrip_mismatch(offset)),
        None => Ok(()),
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then_some(a.len().min(b.len())))
}
