use super::hare_race::{add_race_nodes, RACE_EXAMPLES};
use crate::bnet::common::error::NetworkError;
use crate::bnet::common::interface::{QuerySpec, ScenarioMaker};
use crate::bnet::model::{CptIndexing, Example, Network, NetworkBuilder};

/// P(WetGrass | HarePerf, TortoisePerf), laid out for binary indexing:
/// (T,T), (T,F), (F,T), (F,F).
///
/// Under the default legacy indexing slot 3 is never read: both mixed
/// assignments read slot 1 and (F,F) reads slot 2, giving 0.9 instead of 0.0.
pub const WET_GRASS_CPT: [f64; 4] = [0.99, 0.9, 0.9, 0.0];

/// The race network plus the sixth node the wet grass queries observe.
pub struct WetGrass {}

impl ScenarioMaker for WetGrass {
    fn name(&self) -> &str {
        "wet_grass"
    }

    fn build_network(&self, indexing: CptIndexing) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::new().with_indexing(indexing);
        add_race_nodes(&mut builder)?;
        builder.add_node(
            "WetGrass",
            &["HarePerf", "TortoisePerf"],
            WET_GRASS_CPT.to_vec(),
        )?;
        Ok(builder.build())
    }

    fn queries(&self) -> Vec<QuerySpec> {
        vec![
            QuerySpec::new(
                "rain given wet grass and not playing outside",
                "TortoisePerf",
                &[("HareWins", false), ("WetGrass", true)],
                10_000,
            ),
            QuerySpec::new(
                "sprinklers given a drought",
                "HarePerf",
                &[("Weather", true)],
                100_000,
            ),
            QuerySpec::new(
                "wet grass given rain and sprinklers",
                "WetGrass",
                &[("HarePerf", true), ("TortoisePerf", true)],
                1_000_000,
            ),
        ]
    }

    fn training_examples(&self) -> &[Example] {
        &RACE_EXAMPLES
    }
}
