//! Decode command implementation.

use crate::utils::{decoded_path, format_size};
use oxibwt_bwts::BwtsDecoder;
use std::path::Path;
use std::time::Instant;

pub fn cmd_decode(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| decoded_path(input), Path::to_path_buf);
    let mut block = std::fs::read(input)?;

    let start = Instant::now();
    BwtsDecoder::new().decode_in_place(&mut block)?;
    log::info!("decoded {} in {:.2?}", input.display(), start.elapsed());

    std::fs::write(&output, &block)?;

    println!(
        "{} -> {} ({})",
        input.display(),
        output.display(),
        format_size(block.len() as u64)
    );
    Ok(())
}
