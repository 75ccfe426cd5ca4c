//! Row scheduling for transforms that write a freshly allocated output.
//!
//! Each output row is written by exactly one call of the closure and no
//! input is mutated, so rows can be filled in any order. With the `parallel`
//! feature the rows are distributed over the rayon pool; otherwise they are
//! filled serially. Both paths produce identical results.
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Call `f(y, row)` for every `row_len`-sized chunk of `out`.
pub(crate) fn fill_rows<F>(out: &mut [f32], row_len: usize, f: F)
where
    F: Fn(usize, &mut [f32]) + Sync + Send,
{
    if row_len == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

#[cfg(test)]
mod tests {
    use super::fill_rows;

    #[test]
    fn every_row_is_visited_once() {
        let mut out = vec![0.0f32; 12];
        fill_rows(&mut out, 4, |y, row| {
            for v in row.iter_mut() {
                *v += y as f32 + 1.0;
            }
        });
        assert_eq!(&out[..4], &[1.0; 4]);
        assert_eq!(&out[4..8], &[2.0; 4]);
        assert_eq!(&out[8..], &[3.0; 4]);
    }
}
