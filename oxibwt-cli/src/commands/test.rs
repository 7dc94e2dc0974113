//! Test command implementation.

use crate::utils::{count_runs, format_size};
use oxibwt_bwts::{BwtsDecoder, BwtsEncoder, check_roundtrip};
use oxibwt_core::{OxiBwtError, TransformConfig};
use std::path::Path;
use std::time::Instant;

pub fn cmd_test(input: &Path, config: TransformConfig) -> Result<(), Box<dyn std::error::Error>> {
    let original = std::fs::read(input)?;

    println!(
        "Testing {} ({})",
        input.display(),
        format_size(original.len() as u64)
    );

    let mut encoder = BwtsEncoder::new(config)?;
    let start = Instant::now();
    let encoded = encoder.encode(&original)?;
    let forward_time = start.elapsed();

    let start = Instant::now();
    let decoded = BwtsDecoder::new().decode(&encoded)?;
    let inverse_time = start.elapsed();

    if let Err(err) = check_roundtrip(&original, &decoded) {
        if let OxiBwtError::RoundTripMismatch { offset } = &err {
            println!("  FAILED at offset {}", offset);
        }
        return Err(err.into());
    }

    println!("  Lyndon words: {}", encoder.words().len());
    println!(
        "  Runs:    {} -> {}",
        count_runs(&original),
        count_runs(&encoded)
    );
    println!("  Forward: {:.2?}", forward_time);
    println!("  Inverse: {:.2?}", inverse_time);
    println!("  OK");
    Ok(())
}
