//! Transform configuration.

use crate::error::{OxiBwtError, Result};

/// Configuration for the forward transform's rotation sort.
///
/// The inverse transform is purely sequential and takes no configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    /// Slices shorter than this are sorted sequentially.
    /// Larger slices are split in half and the halves sorted as a fork-join pair.
    pub sequential_threshold: usize,
    /// Whether the two halves of a split may run on different threads.
    /// When false both halves run on the calling thread; output is unchanged.
    pub parallel: bool,
}

impl TransformConfig {
    /// Smallest accepted sequential threshold.
    pub const MIN_THRESHOLD: usize = 2;

    /// Default configuration: 1024-element threshold, parallel fork-join.
    pub const DEFAULT: Self = Self {
        sequential_threshold: 1024,
        parallel: true,
    };

    /// Single-threaded configuration with the default threshold.
    pub const SEQUENTIAL: Self = Self {
        sequential_threshold: 1024,
        parallel: false,
    };

    /// Create a new configuration.
    pub fn new(sequential_threshold: usize, parallel: bool) -> Self {
        Self {
            sequential_threshold,
            parallel,
        }
    }

    /// Set the sequential threshold.
    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    /// Enable or disable parallel fork-join.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the configuration can drive the sort.
    ///
    /// A threshold below 2 would keep splitting single-element slices.
    pub fn validate(&self) -> Result<()> {
        if self.sequential_threshold < Self::MIN_THRESHOLD {
            return Err(OxiBwtError::invalid_config(format!(
                "sequential threshold {} is below the minimum of {}",
                self.sequential_threshold,
                Self::MIN_THRESHOLD
            )));
        }
        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
