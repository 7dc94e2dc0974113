//! # OxiBWT Core
//!
//! Core components shared by the OxiBWT crates.
//!
//! - [`config`]: Transform configuration (sort threshold, fork-join mode)
//! - [`traits`]: Block transform traits
//! - [`buffer`]: Fallible growth of reusable working buffers
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     oxibwt encode / decode / factor / test              │
//! ├─────────────────────────────────────────────────────────┤
//! │ Transform                                               │
//! │     Lyndon factorization, rotation sort, LF inversion   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     Errors, configuration, traits, buffers              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_core::{OxiBwtError, TransformConfig};
//!
//! let config = TransformConfig::default().with_sequential_threshold(1);
//! assert!(matches!(config.validate(), Err(OxiBwtError::InvalidConfig { .. })));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use config::TransformConfig;
pub use error::{OxiBwtError, Result};
pub use traits::{BlockDecoder, BlockEncoder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::TransformConfig;
    pub use crate::error::{OxiBwtError, Result};
    pub use crate::traits::{BlockDecoder, BlockEncoder};
}
