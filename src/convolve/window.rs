//! Clamped neighborhood ranges.
//!
//! A window of radius `r` around `p` on an axis of length `n` covers
//! `max(0, p - r) ..= min(n - 1, p + r)`. Nothing outside the buffer is
//! synthesised: near-edge windows simply contain fewer samples.
use std::ops::Range;

/// Index range of a clamped window along one axis.
#[inline]
pub fn clamped_window(p: usize, radius: usize, n: usize) -> Range<usize> {
    debug_assert!(p < n, "window centre {p} outside axis of length {n}");
    let start = p.saturating_sub(radius);
    let end = p.saturating_add(radius).min(n - 1) + 1;
    start..end
}

/// Kernel index for input position `i` inside the window centred at `p`.
#[inline]
pub fn kernel_index(i: usize, p: usize, radius: usize) -> usize {
    i + radius - p
}
