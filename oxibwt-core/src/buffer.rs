//! Fallible helpers for reusable working buffers.
//!
//! Working buffers are grown with `try_reserve_exact` so that an allocator
//! refusal comes back as [`OxiBwtError::AllocationFailed`] instead of
//! aborting the process. Buffers are truncated between calls, never shrunk,
//! so a long-lived state object settles at the largest block it has seen.

use crate::error::{OxiBwtError, Result};

/// Ensure `buf` can hold `len` elements without reallocating.
///
/// The buffer is cleared first; existing capacity is kept.
pub fn reserve_exact<T>(buf: &mut Vec<T>, len: usize, name: &'static str) -> Result<()> {
    buf.clear();
    if buf.capacity() < len {
        log::trace!(
            "growing {} buffer from {} to {} elements",
            name,
            buf.capacity(),
            len
        );
        buf.try_reserve_exact(len)
            .map_err(|_| OxiBwtError::allocation_failed(name, len))?;
    }
    Ok(())
}

/// Resize `buf` to exactly `len` copies of `fill`.
pub fn resize_with_fill<T: Clone>(
    buf: &mut Vec<T>,
    len: usize,
    fill: T,
    name: &'static str,
) -> Result<()> {
    reserve_exact(buf, len, name)?;
    buf.resize(len, fill);
    Ok(())
}

/// Replace the contents of `buf` with a copy of `data`.
pub fn copy_into<T: Copy>(buf: &mut Vec<T>, data: &[T], name: &'static str) -> Result<()> {
    reserve_exact(buf, data.len(), name)?;
    buf.extend_from_slice(data);
    Ok(())
}
