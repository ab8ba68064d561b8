use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for the random source consumed by the generators in `sampling`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Fixed seed for reproducible draws. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SamplerConfig {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Build a standard generator from this configuration.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("Seeding StdRng with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Activation applied to the single neuron in `linalg::neural_network_with`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    Tanh,
    Sigmoid,
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Relu => x.max(0.0),
            Activation::Identity => x,
        }
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" => Ok(Activation::Relu),
            "identity" | "linear" => Ok(Activation::Identity),
            _ => Err(format!(
                "Unknown activation: {}. Expected one of tanh, sigmoid, relu, identity",
                s
            )),
        }
    }
}
