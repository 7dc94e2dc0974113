//! Factor command implementation.

use crate::utils::preview;
use oxibwt_bwts::lyndon::factorize;
use serde::Serialize;
use std::path::Path;

/// Longest word prefix shown in text output.
const PREVIEW_LEN: usize = 40;

#[derive(Serialize)]
struct FactorReport {
    file: String,
    size: usize,
    word_count: usize,
    longest_word: usize,
    words: Vec<WordEntry>,
}

#[derive(Serialize)]
struct WordEntry {
    start: usize,
    len: usize,
    preview: String,
}

pub fn cmd_factor(
    input: &Path,
    json: bool,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let words = factorize(&data);
    let shown = limit.unwrap_or(words.len()).min(words.len());

    let report = FactorReport {
        file: input.display().to_string(),
        size: data.len(),
        word_count: words.len(),
        longest_word: words.iter().map(|w| w.len).max().unwrap_or(0),
        words: words[..shown]
            .iter()
            .map(|w| WordEntry {
                start: w.start,
                len: w.len,
                preview: preview(w.bytes(&data), PREVIEW_LEN),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File: {}", report.file);
    println!("Size: {} bytes", report.size);
    println!("Lyndon words: {}", report.word_count);
    println!("Longest word: {} bytes", report.longest_word);
    println!();
    println!("{:>10} {:>10}  Word", "Offset", "Length");
    println!("{}", "-".repeat(60));
    for entry in &report.words {
        println!("{:>10} {:>10}  {}", entry.start, entry.len, entry.preview);
    }
    if shown < words.len() {
        println!("... {} more", words.len() - shown);
    }
    Ok(())
}
