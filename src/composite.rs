//! Sample-wise merging of two same-shaped buffers.
use crate::error::{TransformError, TransformResult};
use crate::image::{ImageView, PixelBuffer};
use crate::par::fill_rows;

/// Per-sample Euclidean magnitude `sqrt(a² + b²)`, channel by channel.
///
/// Used to merge perpendicular gradient responses into one edge-strength
/// buffer. Both inputs must have the same shape.
pub fn combine<A: ImageView, B: ImageView>(a: &A, b: &B) -> TransformResult<PixelBuffer> {
    if a.shape() != b.shape() {
        return Err(TransformError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut out = PixelBuffer::zeros(a.shape());
    fill_rows(out.as_mut_slice(), a.row_len(), |y, dst| {
        for ((d, &va), &vb) in dst.iter_mut().zip(a.row(y)).zip(b.row(y)) {
            *d = (va * va + vb * vb).sqrt();
        }
    });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{PixelView, Shape};

    fn signed_image() -> PixelBuffer {
        let data = (0..12).map(|i| (i as f32 - 6.0) * 0.5).collect();
        PixelBuffer::from_vec(2, 3, 2, data).unwrap()
    }

    #[test]
    fn combine_with_zero_is_absolute_value() {
        let img = signed_image();
        let zero = PixelBuffer::new(2, 3, 2).unwrap();
        let out = combine(&img, &zero).unwrap();
        for (o, i) in out.as_slice().iter().zip(img.as_slice()) {
            assert_eq!(*o, i.abs());
        }
    }

    #[test]
    fn combine_is_commutative() {
        let a = signed_image();
        let b = a.map(|v| v * 0.3 + 1.0);
        assert_eq!(combine(&a, &b).unwrap(), combine(&b, &a).unwrap());
    }

    #[test]
    fn accepts_mixed_owned_and_borrowed_inputs() {
        let a = signed_image();
        let data: Vec<f32> = a.as_slice().iter().map(|v| v * 2.0).collect();
        let b = PixelView::new(2, 3, 2, &data).unwrap();
        assert_eq!(combine(&a, &b).unwrap(), combine(&b, &a.view()).unwrap());
    }

    #[test]
    fn three_four_five() {
        let a = PixelBuffer::filled(1, 1, 1, 3.0).unwrap();
        let b = PixelBuffer::filled(1, 1, 1, -4.0).unwrap();
        assert!((combine(&a, &b).unwrap().get(0, 0, 0).unwrap() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_shapes_fail() {
        let a = PixelBuffer::new(2, 2, 1).unwrap();
        let b = PixelBuffer::new(2, 2, 3).unwrap();
        assert_eq!(
            combine(&a, &b).unwrap_err(),
            TransformError::ShapeMismatch {
                left: Shape::new(2, 2, 1),
                right: Shape::new(2, 2, 3),
            }
        );
    }
}
