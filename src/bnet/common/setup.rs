use clap::{builder::EnumValueParser, value_parser, Arg, ArgMatches, Command, ValueEnum};
use env_logger::{Builder, Env};
use serde::Deserialize;
use std::io::Write;

use crate::bnet::model::CptIndexing;

/// Which estimators the demo runs for every query.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum AlgorithmChoice {
    #[serde(rename = "rejection")]
    Rejection,

    #[serde(rename = "gibbs")]
    Gibbs,

    /// Rejection and Gibbs side by side
    #[serde(rename = "all")]
    All,
}

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub scenario_name: String,
    /// Overrides the per-query sample counts of the scenario
    pub num_samples: Option<usize>,
    pub seed: Option<u64>,
    pub algorithm: AlgorithmChoice,
    pub indexing: CptIndexing,
    pub print_samples: usize,
    pub burn_in: usize,
    pub report_file: Option<String>,
}

/// Installs `env_logger` with an `info` default and `LEVEL [file:line]` lines.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
}

pub fn build_command() -> Command {
    Command::new("BAYESSIM")
        .version("0.1")
        .about("Approximate inference on small boolean Bayesian networks by sampling.")
        .arg(
            Arg::new("scenario_name")
                .long("scenario_name")
                .value_name("STRING")
                .help("Network to build: 'hare_race' or 'wet_grass'")
                .default_value("hare_race"),
        )
        .arg(
            Arg::new("num_samples")
                .long("num_samples")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Sample count for every query (defaults to the scenario's own counts)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .value_parser(value_parser!(u64))
                .help("Seed for the random source; omitted means seeded from entropy"),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .value_parser(EnumValueParser::<AlgorithmChoice>::new())
                .help("Estimator to run: 'rejection', 'gibbs' or 'all'")
                .default_value("rejection"),
        )
        .arg(
            Arg::new("indexing")
                .long("indexing")
                .value_parser(EnumValueParser::<CptIndexing>::new())
                .help("CPT indexing scheme: 'legacy' (0-2 parents) or 'binary'")
                .default_value("legacy"),
        )
        .arg(
            Arg::new("print_samples")
                .long("print_samples")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Number of joint samples to print")
                .default_value("5"),
        )
        .arg(
            Arg::new("burn_in")
                .long("burn_in")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Gibbs sweeps discarded before counting")
                .default_value("100"),
        )
        .arg(
            Arg::new("report_file")
                .long("report_file")
                .value_name("FILE")
                .help("Write the estimates as JSON to this file (optional)"),
        )
}

pub fn options_from_matches(matches: &ArgMatches) -> CommandLineOptions {
    let scenario_name = matches
        .get_one::<String>("scenario_name")
        .cloned()
        .unwrap_or_else(|| "hare_race".to_string());
    let algorithm = matches
        .get_one::<AlgorithmChoice>("algorithm")
        .copied()
        .unwrap_or(AlgorithmChoice::Rejection);
    let indexing = matches
        .get_one::<CptIndexing>("indexing")
        .copied()
        .unwrap_or_default();
    // defaults are declared on the args, the fallbacks only mirror them
    let print_samples = matches.get_one::<usize>("print_samples").copied().unwrap_or(5);
    let burn_in = matches.get_one::<usize>("burn_in").copied().unwrap_or(100);

    CommandLineOptions {
        scenario_name,
        num_samples: matches.get_one::<usize>("num_samples").copied(),
        seed: matches.get_one::<u64>("seed").copied(),
        algorithm,
        indexing,
        print_samples,
        burn_in,
        report_file: matches.get_one::<String>("report_file").cloned(),
    }
}

/// Initialises logging and parses the process arguments.
pub fn parse_configuration_options() -> CommandLineOptions {
    init_logging();
    let matches = build_command().get_matches();
    options_from_matches(&matches)
}
