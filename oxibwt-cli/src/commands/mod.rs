//! Command implementations for OxiBWT CLI.

pub mod decode;
pub mod encode;
pub mod factor;
pub mod test;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use factor::cmd_factor;
pub use test::cmd_test;
