use std::ops::Range;

/// Split `0..n` into `threads` contiguous, ordered ranges.
/// Sizes differ by at most one, the first `n % threads` ranges
/// get the extra slice. Ranges are empty when `threads > n`.
pub fn partition(n: usize, threads: usize) -> Vec<Range<usize>> {
    debug_assert!(threads > 0);
    let base = n / threads;
    let remainder = n % threads;
    let mut result = Vec::with_capacity(threads);
    let mut start = 0;
    for t in 0..threads {
        let len = base + usize::from(t < remainder);
        result.push(start..start + len);
        start += len;
    }
    debug_assert_eq!(start, n);
    result
}
