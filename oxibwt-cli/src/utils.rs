//! Utility functions for the CLI.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension appended to transformed files.
pub const BWTS_EXTENSION: &str = "bwts";

/// Default output path for `encode`: `<input>.bwts`.
pub fn encoded_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(BWTS_EXTENSION);
    PathBuf::from(name)
}

/// Default output path for `decode`: strip `.bwts`, otherwise append `.out`.
pub fn decoded_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == BWTS_EXTENSION) {
        return input.with_extension("");
    }
    let mut name = OsString::from(input.as_os_str());
    name.push(".out");
    PathBuf::from(name)
}

/// Number of maximal runs of equal bytes.
pub fn count_runs(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    1 + data.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Render bytes for terminal display, escaping anything non-printable.
pub fn preview(bytes: &[u8], max_len: usize) -> String {
    let mut out: String = bytes
        .iter()
        .take(max_len)
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect();
    if bytes.len() > max_len {
        out.push_str("...");
    }
    out
}

/// Format a byte count with a binary unit.
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
