use anyhow::{anyhow, Result};
use std::rc::Rc;

use crate::bnet::common::interface::ScenarioMaker;

use super::{hare_race::HareRace, wet_grass::WetGrass};

pub struct ScenarioMakerFactory;

impl ScenarioMakerFactory {
    pub const NAMES: [&'static str; 2] = ["hare_race", "wet_grass"];

    pub fn new_shared(namespace: &str) -> Result<Rc<dyn ScenarioMaker>> {
        match namespace {
            "hare_race" => Ok(Rc::new(HareRace {})),
            "wet_grass" => Ok(Rc::new(WetGrass {})),
            _ => Err(anyhow!(
                "Unknown scenario '{}', expected one of {:?}",
                namespace,
                Self::NAMES
            )),
        }
    }
}
