//! Integration tests for the piecewise scalar and vector functions.

use ndarray::{array, Array1};
use numeric_utils::piecewise::{scalar_function, vector_function};
use numeric_utils::NumericError;

// ---------------------------------------------------------------------------
// scalar_function
// ---------------------------------------------------------------------------

#[test]
fn scalar_function_product_branch() {
    assert_eq!(scalar_function(2.0, 5.0), 10.0);
}

#[test]
fn scalar_function_quotient_branch() {
    assert_eq!(scalar_function(6.0, 3.0), 2.0);
}

#[test]
fn scalar_function_equal_takes_product() {
    assert_eq!(scalar_function(3.0, 3.0), 9.0);
}

#[test]
fn scalar_function_divide_by_zero_is_infinite() {
    let f = scalar_function(1.0, 0.0);
    assert!(f.is_infinite() && f.is_sign_positive());
}

#[test]
fn scalar_function_negative_over_zero_takes_product() {
    let f = scalar_function(-1.0, 0.0);
    assert_eq!(f, 0.0);
    assert!(f.is_sign_negative());
}

#[test]
fn scalar_function_nan_propagates() {
    assert!(scalar_function(f64::NAN, 1.0).is_nan());
    assert!(scalar_function(1.0, f64::NAN).is_nan());
}

// ---------------------------------------------------------------------------
// vector_function
// ---------------------------------------------------------------------------

#[test]
fn vector_function_applies_rule_in_order() {
    let x = array![2.0, 6.0];
    let y = array![5.0, 3.0];
    assert_eq!(vector_function(&x, &y).unwrap(), vec![10.0, 2.0]);
}

#[test]
fn vector_function_matches_scalar_function() {
    let x = array![-1.0, 0.5, 4.0, 7.0, 0.0];
    let y = array![2.0, 0.5, -2.0, 0.0, 3.0];
    let out = vector_function(&x, &y).unwrap();
    assert_eq!(out.len(), x.len());
    for i in 0..x.len() {
        let expected = scalar_function(x[i], y[i]);
        assert!(
            out[i] == expected || (out[i].is_nan() && expected.is_nan()),
            "index {}: {} != {}",
            i,
            out[i],
            expected
        );
    }
}

#[test]
fn vector_function_empty() {
    let x: Array1<f64> = Array1::zeros(0);
    let y: Array1<f64> = Array1::zeros(0);
    assert!(vector_function(&x, &y).unwrap().is_empty());
}

#[test]
fn vector_function_rejects_length_mismatch() {
    let x = array![1.0, 2.0, 3.0];
    let y = array![1.0, 2.0];
    let err = vector_function(&x, &y).unwrap_err();
    assert_eq!(err, NumericError::LengthMismatch { left: 3, right: 2 });
    assert!(err.to_string().contains("same size"));
}
