//! Encode command implementation.

use crate::utils::{count_runs, encoded_path, format_size};
use oxibwt_bwts::BwtsEncoder;
use oxibwt_core::TransformConfig;
use std::path::Path;
use std::time::Instant;

pub fn cmd_encode(
    input: &Path,
    output: Option<&Path>,
    config: TransformConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| encoded_path(input), Path::to_path_buf);
    let mut block = std::fs::read(input)?;
    let runs_before = count_runs(&block);

    let mut encoder = BwtsEncoder::new(config)?;
    let start = Instant::now();
    encoder.encode_in_place(&mut block)?;
    let elapsed = start.elapsed();
    log::info!(
        "encoded {} in {:.2?} ({} Lyndon words)",
        input.display(),
        elapsed,
        encoder.words().len()
    );

    std::fs::write(&output, &block)?;

    println!(
        "{} -> {} ({})",
        input.display(),
        output.display(),
        format_size(block.len() as u64)
    );
    println!("  Runs: {} -> {}", runs_before, count_runs(&block));
    Ok(())
}
