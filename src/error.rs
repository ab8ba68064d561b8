use std::error::Error;
use std::fmt;

/// Invalid-argument failures raised by the numeric operations.
///
/// Every variant is reported before any computation or random sampling
/// happens, so a failed call never leaves partial results behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// A count or dimension argument was negative.
    NegativeDimension { name: &'static str, value: i64 },
    /// An array that must be a column (second dimension == 1) was not.
    NotColumn {
        name: &'static str,
        shape: (usize, usize),
    },
    /// Two arrays that must share a shape did not.
    ShapeMismatch {
        lhs: &'static str,
        lhs_shape: (usize, usize),
        rhs: &'static str,
        rhs_shape: (usize, usize),
    },
    /// Two vectors that must share a length did not.
    LengthMismatch { left: usize, right: usize },
    /// The requested shape has more elements than can be allocated.
    ShapeTooLarge { rows: usize, cols: usize },
}

impl NumericError {
    /// All failures in this crate belong to the single invalid-argument kind.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            NumericError::NegativeDimension { .. }
            | NumericError::NotColumn { .. }
            | NumericError::ShapeMismatch { .. }
            | NumericError::LengthMismatch { .. }
            | NumericError::ShapeTooLarge { .. } => true,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericError::NegativeDimension { name, value } => write!(
                f,
                "Only non-negative integers are allowed: {} = {}",
                name, value
            ),
            NumericError::NotColumn { name, shape } => write!(
                f,
                "Only column arrays could be entered: {} has shape ({}, {})",
                name, shape.0, shape.1
            ),
            NumericError::ShapeMismatch {
                lhs,
                lhs_shape,
                rhs,
                rhs_shape,
            } => write!(
                f,
                "{} and {} must have the same shape: ({}, {}) vs ({}, {})",
                lhs, rhs, lhs_shape.0, lhs_shape.1, rhs_shape.0, rhs_shape.1
            ),
            NumericError::LengthMismatch { left, right } => write!(
                f,
                "vectors should be of same size: {} vs {}",
                left, right
            ),
            NumericError::ShapeTooLarge { rows, cols } => write!(
                f,
                "shape ({}, {}) is too large to allocate",
                rows, cols
            ),
        }
    }
}

impl Error for NumericError {}

pub type Result<T> = std::result::Result<T, NumericError>;
