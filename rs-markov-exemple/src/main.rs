use log::info;

use rs_markov_core::model::config::ModelConfig;
use rs_markov_core::model::generator::{GenerationInput, Generator, Seed};
use rs_markov_core::model::markov_model::MarkovModel;
use rs_markov_core::model::sampler::RandomSampler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Training file: first CLI argument, or the default corpus location.
    // Lines are joined with the boundary sentinel so that line breaks
    // become ordinary transitions in the model.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/comments.txt".to_owned());

    // Default hyperparameters: missing-word floor 1e-4,
    // missing-transition probability 1e-11
    let mut model = MarkovModel::new(ModelConfig::default());
    model.fit_from_path(&path)?;
    info!(
        "Trained on '{}': {} vocabulary entries",
        path,
        model.vocabulary().len()
    );

    // Seed can be set to
    // 'Boundary' to start from the line sentinel (a trained line start)
    // 'One' to start from a single seed token
    // 'Two' to start from a pair of seed tokens
    let input = GenerationInput {
        max_len: 100,
        seed: Seed::Boundary,
    };

    // Generate 20 sequences using the input settings
    let mut generator = Generator::new(&model, RandomSampler);
    for i in 0..20 {
        println!("Generated {}: {}", i + 1, generator.generate(&input)?);
    }

    // Seeds must exist in the trained vocabulary
    let bad_seed = GenerationInput {
        max_len: 10,
        seed: Seed::One("notawordfromthecorpus".to_owned()),
    };
    match Generator::new(&model, RandomSampler).generate(&bad_seed) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected as expected: {e}"),
    }

    Ok(())
}
