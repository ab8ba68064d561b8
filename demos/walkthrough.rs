use anyhow::{Context, Result};
use log::LevelFilter;
use ndarray::array;

use numeric_utils::config::SamplerConfig;
use numeric_utils::{neural_network, norm, operations, randomization, scalar_function, vector_function};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NUMERIC_UTILS_LOG", "error,numeric_utils=info"))
        .init();

    let seed = match std::env::var("NUMERIC_UTILS_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .with_context(|| format!("NUMERIC_UTILS_SEED is not a u64: {}", raw))?,
        ),
        Err(_) => None,
    };
    let config = SamplerConfig::new(seed);
    log::info!("Sampler config: {:?}", config);
    let mut rng = config.build_rng();

    let column = randomization(3, &mut rng)?;
    println!("randomization(3):\n{}", column);

    let (a, b, s) = operations(2, 3, &mut rng)?;
    println!("operations(2, 3):\nA =\n{}\nB =\n{}\nA + B =\n{}", a, b, s);

    let (a, b, _) = operations(4, 1, &mut rng)?;
    println!("norm(A, B) = {}", norm(&a, &b)?);

    let inputs = array![[1.0], [0.0]];
    let weights = array![[0.0], [1.0]];
    println!("neural_network = {}", neural_network(&inputs, &weights)?);

    println!("scalar_function(2, 5) = {}", scalar_function(2.0, 5.0));
    println!("scalar_function(6, 3) = {}", scalar_function(6.0, 3.0));
    println!(
        "vector_function([2, 6], [5, 3]) = {:?}",
        vector_function(&array![2.0, 6.0], &array![5.0, 3.0])?
    );

    if let Err(e) = randomization(-1, &mut rng) {
        log::error!("Rejected as expected: {}", e);
    }

    Ok(())
}
