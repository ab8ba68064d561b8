//! The piecewise function `f(x, y) = x * y` if `x <= y`, else `x / y`.
//!
//! Division by zero is not trapped: it follows IEEE-754, so a positive `x`
//! over `y == 0.0` gives `+inf`. A NaN operand fails the `x <= y` test and
//! propagates through the quotient.
use ndarray::Array1;

use crate::error::{NumericError, Result};

pub fn scalar_function(x: f64, y: f64) -> f64 {
    if x <= y {
        return x * y;
    }
    if y == 0.0 {
        log::debug!("scalar_function dividing {} by zero", x);
    }
    x / y
}

/// Apply [`scalar_function`] pairwise, keeping index order.
///
/// # Errors
///
/// `LengthMismatch` if `x` and `y` differ in length.
pub fn vector_function(x: &Array1<f64>, y: &Array1<f64>) -> Result<Vec<f64>> {
    if x.len() != y.len() {
        return Err(NumericError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    Ok(x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| scalar_function(xi, yi))
        .collect())
}
