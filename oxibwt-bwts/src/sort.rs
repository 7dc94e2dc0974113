//! Fork-join merge sort over rotations.
//!
//! Slices at or above the sequential threshold are split at the midpoint.
//! Both halves are sorted as a fork-join pair (on the rayon pool when the
//! `parallel` feature is enabled and the configuration allows it), then
//! merged into the matching range of a scratch buffer and copied back.
//!
//! The scratch buffer is split alongside the rotations, so every recursive
//! call owns disjoint ranges of both. No locking is needed beyond the join.

use crate::rotation::{Rotation, compare, less};
use oxibwt_core::buffer::resize_with_fill;
use oxibwt_core::{OxiBwtError, Result, TransformConfig};

/// Sort `rotations` in cyclic order using `scratch` as merge space.
///
/// `scratch` is only used once `rotations` reaches the sequential threshold,
/// and must then be at least as long as `rotations`. Its contents on return
/// are unspecified.
///
/// # Errors
///
/// Returns [`OxiBwtError::BufferTooSmall`] if `scratch` is needed and shorter
/// than `rotations`. `rotations` is left unchanged in that case.
pub fn par_sort(
    text: &[u8],
    rotations: &mut [Rotation],
    scratch: &mut [Rotation],
    config: &TransformConfig,
) -> Result<()> {
    let threshold = config
        .sequential_threshold
        .max(TransformConfig::MIN_THRESHOLD);
    let n = rotations.len();
    if n < threshold {
        rotations.sort_unstable_by(|a, b| compare(text, a, b));
        return Ok(());
    }

    if scratch.len() < n {
        return Err(OxiBwtError::buffer_too_small(n, scratch.len()));
    }
    sort_range(text, rotations, &mut scratch[..n], threshold, config.parallel);
    Ok(())
}

/// Sort `rotations` in cyclic order, allocating the merge space.
pub fn sort_rotations(
    text: &[u8],
    rotations: &mut [Rotation],
    config: &TransformConfig,
) -> Result<()> {
    let fill = Rotation {
        start: 0,
        len: 1,
        offset: 0,
    };
    let mut scratch = Vec::new();
    resize_with_fill(&mut scratch, rotations.len(), fill, "scratch")?;
    par_sort(text, rotations, &mut scratch, config)
}

fn sort_range(
    text: &[u8],
    rotations: &mut [Rotation],
    scratch: &mut [Rotation],
    threshold: usize,
    parallel: bool,
) {
    let n = rotations.len();
    if n < threshold {
        rotations.sort_unstable_by(|a, b| compare(text, a, b));
        return;
    }

    let mid = n / 2;
    {
        let (left, right) = rotations.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        fork_join(
            parallel,
            || sort_range(text, left, scratch_left, threshold, parallel),
            || sort_range(text, right, scratch_right, threshold, parallel),
        );
    }

    // Halves already in order.
    if !less(text, &rotations[mid], &rotations[mid - 1]) {
        return;
    }

    let (left, right) = rotations.split_at(mid);
    merge(text, left, right, scratch);
    rotations.copy_from_slice(scratch);
}

/// Two-pointer merge of sorted `left` and `right` into `out`.
///
/// Ties take from `left` first.
fn merge(text: &[u8], left: &[Rotation], right: &[Rotation], out: &mut [Rotation]) {
    debug_assert_eq!(left.len() + right.len(), out.len());
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = i == left.len() || (j < right.len() && less(text, &right[j], &left[i]));
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

#[cfg(feature = "parallel")]
fn fork_join<A, B>(parallel: bool, a: A, b: B)
where
    A: FnOnce() + Send,
    B: FnOnce() + Send,
{
    if parallel {
        rayon::join(a, b);
    } else {
        a();
        b();
    }
}

#[cfg(not(feature = "parallel"))]
fn fork_join<A, B>(_parallel: bool, a: A, b: B)
where
    A: FnOnce(),
    B: FnOnce(),
{
    a();
    b();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyndon::factorize;
    use crate::rotation::catalog;

    fn generate(size: usize, alphabet: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed = 12345u32;
        for _ in 0..size {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            data.push(b'a' + ((seed >> 16) as u8) % alphabet);
        }
        data
    }

    fn assert_sorted(text: &[u8], rotations: &[Rotation]) {
        for pair in rotations.windows(2) {
            assert!(
                !less(text, &pair[1], &pair[0]),
                "out of order: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_merge() {
        let text = b"dcba";
        let r = |start| Rotation {
            start,
            len: 1,
            offset: 0,
        };
        // "c", "d" and "a", "b"
        let left = [r(1), r(0)];
        let right = [r(3), r(2)];
        let mut out = [r(0); 4];
        merge(text, &left, &right, &mut out);
        assert_eq!(out, [r(3), r(2), r(1), r(0)]);
    }

    #[test]
    fn test_sort_below_threshold() {
        let text = b"mississippi";
        let mut rotations = catalog(&factorize(text));
        sort_rotations(text, &mut rotations, &TransformConfig::DEFAULT).unwrap();
        assert_sorted(text, &rotations);
    }

    #[test]
    fn test_sort_fork_join() {
        let text = generate(5000, 4);
        let mut rotations = catalog(&factorize(&text));
        let config = TransformConfig::new(64, true);
        sort_rotations(&text, &mut rotations, &config).unwrap();
        assert_sorted(&text, &rotations);
        assert_eq!(rotations.len(), text.len());
    }

    #[test]
    fn test_sort_matches_sequential() {
        let text = generate(3000, 3);
        let words = factorize(&text);

        let mut expected = catalog(&words);
        expected.sort_by(|a, b| compare(&text, a, b));

        for config in [
            TransformConfig::new(2, true),
            TransformConfig::new(2, false),
            TransformConfig::new(100, true),
            TransformConfig::DEFAULT,
        ] {
            let mut rotations = catalog(&words);
            sort_rotations(&text, &mut rotations, &config).unwrap();
            let got: Vec<u8> = rotations.iter().map(|r| r.preceding(&text)).collect();
            let want: Vec<u8> = expected.iter().map(|r| r.preceding(&text)).collect();
            assert_eq!(got, want, "config {:?}", config);
        }
    }

    #[test]
    fn test_par_sort_reuses_larger_scratch() {
        let text = generate(2000, 2);
        let mut rotations = catalog(&factorize(&text));
        let fill = rotations[0];
        let mut scratch = vec![fill; 4096];
        par_sort(&text, &mut rotations, &mut scratch, &TransformConfig::new(8, true)).unwrap();
        assert_sorted(&text, &rotations);
    }

    #[test]
    fn test_par_sort_small_without_scratch() {
        let text = b"abracadabra";
        let mut rotations = catalog(&factorize(text));
        par_sort(text, &mut rotations, &mut [], &TransformConfig::DEFAULT).unwrap();
        assert_sorted(text, &rotations);
    }

    #[test]
    fn test_par_sort_short_scratch_is_error() {
        let text = generate(2048, 4);
        let mut rotations = catalog(&factorize(&text));
        let before = rotations.clone();

        let err = par_sort(&text, &mut rotations, &mut [], &TransformConfig::DEFAULT).unwrap_err();
        assert!(matches!(
            err,
            OxiBwtError::BufferTooSmall {
                needed: 2048,
                available: 0
            }
        ));
        assert_eq!(rotations, before);

        let mut scratch = vec![rotations[0]; 2047];
        let err = par_sort(&text, &mut rotations, &mut scratch, &TransformConfig::DEFAULT)
            .unwrap_err();
        assert!(matches!(err, OxiBwtError::BufferTooSmall { available: 2047, .. }));
    }

    #[test]
    fn test_sort_empty() {
        let mut rotations: Vec<Rotation> = Vec::new();
        sort_rotations(b"", &mut rotations, &TransformConfig::DEFAULT).unwrap();
        assert!(rotations.is_empty());
    }
}
