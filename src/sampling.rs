//! Uniform random array generators.
//!
//! Both generators take the random source explicitly so callers can seed it
//! (see `config::SamplerConfig`). Argument checks run before the source is
//! touched: a rejected call leaves the generator state unchanged.
use ndarray::Array2;
use rand::Rng;

use crate::error::{NumericError, Result};

/// Convert a signed count into an array dimension, rejecting negatives.
fn checked_dim(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        log::debug!("Rejected dimension {} = {}", name, value);
        NumericError::NegativeDimension { name, value }
    })
}

/// Reject shapes ndarray cannot hold: the product of the non-zero axis
/// lengths and the byte size of the buffer must both fit in `isize`.
fn checked_shape(rows: usize, cols: usize) -> Result<(usize, usize)> {
    let limit = isize::MAX as usize;
    let addressable = rows
        .max(1)
        .checked_mul(cols.max(1))
        .map_or(false, |n| n <= limit);
    let allocatable = rows
        .checked_mul(cols)
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
        .map_or(false, |bytes| bytes <= limit);

    if !(addressable && allocatable) {
        log::debug!("Rejected shape ({}, {})", rows, cols);
        return Err(NumericError::ShapeTooLarge { rows, cols });
    }
    Ok((rows, cols))
}

/// Fill a `rows x cols` array with independent draws from U[0, 1).
fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_simple_fn((rows, cols), || rng.gen::<f64>())
}

/// Generate an `n x 1` column of uniform random values in `[0, 1)`.
///
/// # Errors
///
/// * `NegativeDimension` if `n < 0`.
/// * `ShapeTooLarge` if an `n x 1` array of `f64` cannot be addressed.
pub fn randomization<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<Array2<f64>> {
    let n = checked_dim("n", n)?;
    checked_shape(n, 1)?;
    log::trace!("Sampling random column of length {}", n);
    Ok(uniform(n, 1, rng))
}

/// Sample two independent `h x w` uniform arrays and return them together
/// with their elementwise sum, in the order `(A, B, A + B)`.
///
/// `h` is checked before `w`, so each bad dimension is reported on its own.
/// A shape whose size overflows `isize` is rejected with `ShapeTooLarge`.
pub fn operations<R: Rng + ?Sized>(
    h: i64,
    w: i64,
    rng: &mut R,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>)> {
    let h = checked_dim("h", h)?;
    let w = checked_dim("w", w)?;
    let (h, w) = checked_shape(h, w)?;

    log::trace!("Sampling paired {}x{} arrays", h, w);
    let a = uniform(h, w, rng);
    let b = uniform(h, w, rng);
    let s = &a + &b;

    Ok((a, b, s))
}

/// `randomization` drawing from the thread-local generator.
pub fn randomization_thread_rng(n: i64) -> Result<Array2<f64>> {
    randomization(n, &mut rand::thread_rng())
}

/// `operations` drawing from the thread-local generator.
pub fn operations_thread_rng(
    h: i64,
    w: i64,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>)> {
    operations(h, w, &mut rand::thread_rng())
}
