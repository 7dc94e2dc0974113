//! Error types for OxiBWT operations.
//!
//! The transform itself has very few failure modes: it performs no I/O and
//! accepts any byte buffer. What remains is allocation failure of the
//! working buffers, undersized caller buffers, invalid configuration, and
//! the I/O and verification errors raised by callers such as the CLI.

use std::io;
use thiserror::Error;

/// The main error type for OxiBWT operations.
#[derive(Debug, Error)]
pub enum OxiBwtError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A working or scratch buffer could not be reserved.
    #[error("Allocation failed: could not reserve {requested} elements for {buffer}")]
    AllocationFailed {
        /// Name of the buffer being grown.
        buffer: &'static str,
        /// Number of elements requested.
        requested: usize,
    },

    /// A caller-supplied buffer is shorter than the operation requires.
    #[error("Buffer too small: need {needed} elements, have {available}")]
    BufferTooSmall {
        /// Number of elements required.
        needed: usize,
        /// Number of elements provided.
        available: usize,
    },

    /// Transform configuration rejected by validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Decoding the encoded form did not reproduce the input.
    #[error("Round-trip mismatch at offset {offset}")]
    RoundTripMismatch {
        /// First byte offset at which the two buffers differ.
        offset: usize,
    },
}

/// Result type alias for OxiBWT operations.
pub type Result<T> = std::result::Result<T, OxiBwtError>;

impl OxiBwtError {
    /// Create an allocation failure error.
    pub fn allocation_failed(buffer: &'static str, requested: usize) -> Self {
        Self::AllocationFailed { buffer, requested }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall { needed, available }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a round-trip mismatch error.
    pub fn roundtrip_mismatch(offset: usize) -> Self {
        Self::RoundTripMismatch { offset }
    }
}
