use anyhow::Result;
use bayessim::bnet::common::interface::ConditionalEstimator;
use bayessim::bnet::common::setup::{parse_configuration_options, AlgorithmChoice};
use bayessim::bnet::inference::{sample_joint, EstimateReport, GibbsConfig, GibbsSampler, RejectionSampler};
use bayessim::bnet::model::derive_conditional_from_examples;
use bayessim::bnet::scenarios::factory::ScenarioMakerFactory;
use bayessim::{print_blue, print_green, print_red, print_yellow, NetworkError};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn main() -> Result<()> {
    // Logging is initialized in setup.rs
    let config = parse_configuration_options();
    info!("Scenario: {}", &config.scenario_name);

    let scenario = ScenarioMakerFactory::new_shared(&config.scenario_name)?;
    let mut network = scenario.build_network(config.indexing)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let examples = scenario.training_examples();
    if !examples.is_empty() {
        let [given_true, given_false] = derive_conditional_from_examples(examples)?;
        print_blue!("Learned from {} examples", examples.len());
        println!("When the condition holds, the outcome is true {:.1}% of the time.", given_true * 100.0);
        println!("When it does not, the outcome is true {:.1}% of the time.", given_false * 100.0);
    }

    if config.print_samples > 0 {
        print_blue!("\nJoint samples");
        for _ in 0..config.print_samples {
            sample_joint(&mut network, &mut rng)?;
            println!("{}", network);
        }
    }

    let gibbs = GibbsConfig {
        burn_in: config.burn_in,
        ..GibbsConfig::default()
    };
    let estimators: Vec<Box<dyn ConditionalEstimator>> = match config.algorithm {
        AlgorithmChoice::Rejection => vec![Box::new(RejectionSampler)],
        AlgorithmChoice::Gibbs => vec![Box::new(GibbsSampler::new(gibbs))],
        AlgorithmChoice::All => vec![Box::new(RejectionSampler), Box::new(GibbsSampler::new(gibbs))],
    };

    let mut report = EstimateReport::new(scenario.name(), config.seed);
    for estimator in &estimators {
        print_blue!("\n{}", estimator.algorithm());
        for query in scenario.queries() {
            let (query_id, evidence) = query.resolve(&network)?;
            let num_samples = config.num_samples.unwrap_or(query.num_samples);
            match estimator.estimate(&mut network, query_id, &evidence, num_samples, &mut rng) {
                Ok(estimate) => {
                    print_green!("{}    ({})", estimate.render(), query.label);
                    println!(
                        "    {} of {} samples used ({:.1}%)",
                        estimate.samples_accepted,
                        estimate.samples_drawn,
                        estimate.acceptance_rate() * 100.0
                    );
                    report.push(estimate);
                }
                Err(NetworkError::InsufficientSamples { drawn }) => {
                    print_yellow!(
                        "{}: no sample out of {} matched the evidence, try more samples",
                        query.label,
                        drawn
                    );
                }
                Err(e) => {
                    print_red!("{}: {}", query.label, e);
                    return Err(e.into());
                }
            }
        }
    }

    if let Some(path) = &config.report_file {
        report.save_to_file(Path::new(path))?;
        print_green!("\nWrote {} estimates to {}", report.estimates.len(), path);
    }

    Ok(())
}
