//! Norms and the one-neuron forward pass.
use ndarray::Array2;

use crate::config::Activation;
use crate::error::{NumericError, Result};

fn ensure_column(name: &'static str, a: &Array2<f64>) -> Result<()> {
    if a.ncols() != 1 {
        return Err(NumericError::NotColumn {
            name,
            shape: a.dim(),
        });
    }
    Ok(())
}

fn ensure_same_shape(
    lhs: &'static str,
    a: &Array2<f64>,
    rhs: &'static str,
    b: &Array2<f64>,
) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(NumericError::ShapeMismatch {
            lhs,
            lhs_shape: a.dim(),
            rhs,
            rhs_shape: b.dim(),
        });
    }
    Ok(())
}

/// Square root of the sum of squares of every entry.
pub fn l2_norm(a: &Array2<f64>) -> f64 {
    a.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// L2 norm of `a + b` for two column arrays.
///
/// # Errors
///
/// * `NotColumn` if `a`, then `b`, has a second dimension other than 1.
/// * `ShapeMismatch` if the columns differ in length.
pub fn norm(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    ensure_column("A", a)?;
    ensure_column("B", b)?;
    ensure_same_shape("A", a, "B", b)?;

    let ab = a + b;
    Ok(l2_norm(&ab))
}

/// Forward pass of a single tanh neuron without bias: `tanh(weights^T . inputs)`.
///
/// For `(k, 1)` column inputs the result is a `1 x 1` array. Same-shaped
/// `(h, w)` inputs give the `(w, w)` matrix `tanh(weights^T . inputs)`.
///
/// Outputs lie in `(-1, 1)` only for moderate pre-activations: in `f64`,
/// `tanh` rounds to exactly `±1.0` once `|weights^T . inputs|` exceeds about 19.
pub fn neural_network(inputs: &Array2<f64>, weights: &Array2<f64>) -> Result<Array2<f64>> {
    neural_network_with(inputs, weights, Activation::Tanh)
}

/// Same as [`neural_network`] with a caller-chosen activation.
pub fn neural_network_with(
    inputs: &Array2<f64>,
    weights: &Array2<f64>,
    activation: Activation,
) -> Result<Array2<f64>> {
    ensure_same_shape("inputs", inputs, "weights", weights)?;

    let wh = weights.t().dot(inputs);
    log::trace!("Pre-activation shape {:?}, activation {:?}", wh.dim(), activation);
    Ok(wh.mapv(|v| activation.apply(v)))
}
