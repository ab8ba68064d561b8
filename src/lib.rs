//! numeric-utils: small stateless helpers over `ndarray` arrays.
//!
//! The crate covers uniform random array generation, the L2 norm of a sum of
//! columns, a single-neuron forward pass and a piecewise scalar/vector
//! function. Every operation borrows its inputs, returns fresh values and
//! validates arguments up front, reporting failures as [`NumericError`].
//!
//! Random sources are passed in explicitly; use [`config::SamplerConfig`] to
//! build a seeded generator when reproducible draws are needed.
pub mod config;
pub mod error;
pub mod linalg;
pub mod piecewise;
pub mod sampling;

pub use error::{NumericError, Result};
pub use linalg::{neural_network, neural_network_with, norm};
pub use piecewise::{scalar_function, vector_function};
pub use sampling::{operations, randomization};
