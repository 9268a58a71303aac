use crate::bnet::common::error::NetworkError;
use crate::bnet::common::interface::{QuerySpec, ScenarioMaker};
use crate::bnet::model::{CptIndexing, Example, Network, NetworkBuilder};

/// Observations in the form { TortoisePerf, HareWins }.
pub const RACE_EXAMPLES: [Example; 13] = [
    (true, false),
    (true, false),
    (true, true),
    (true, false),
    (true, false),
    (false, true),
    (false, false),
    (false, true),
    (false, true),
    (false, true),
    (false, false),
    (false, true),
    (false, true),
];

/// Adds the five race nodes shared by every scenario in this module.
pub fn add_race_nodes(builder: &mut NetworkBuilder) -> Result<(), NetworkError> {
    builder.add_node("Course", &[], vec![0.4])?;
    builder.add_node("Weather", &[], vec![0.002])?;
    builder.add_node(
        "HarePerf",
        &["Course", "Weather"],
        vec![0.02, 0.1, 0.15, 0.5],
    )?;
    builder.add_node("TortoisePerf", &["Course"], vec![0.8, 0.1])?;
    builder.add_learned_node("HareWins", "TortoisePerf", &RACE_EXAMPLES)?;
    Ok(())
}

/// The five node reference network.
pub struct HareRace {}

impl ScenarioMaker for HareRace {
    fn name(&self) -> &str {
        "hare_race"
    }

    fn build_network(&self, indexing: CptIndexing) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::new().with_indexing(indexing);
        add_race_nodes(&mut builder)?;
        Ok(builder.build())
    }

    fn queries(&self) -> Vec<QuerySpec> {
        vec![
            QuerySpec::new(
                "hare performs given bad weather",
                "HarePerf",
                &[("Weather", true)],
                100_000,
            ),
            QuerySpec::new(
                "long course given tortoise performed and hare lost",
                "Course",
                &[("TortoisePerf", true), ("HareWins", false)],
                10_000,
            ),
            QuerySpec::new("hare wins", "HareWins", &[], 10_000),
        ]
    }

    fn training_examples(&self) -> &[Example] {
        &RACE_EXAMPLES
    }
}
