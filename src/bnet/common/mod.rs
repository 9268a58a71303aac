pub mod error;
pub mod interface;
#[macro_use]
pub mod logging;
pub mod setup;

pub use error::NetworkError;
pub use interface::{ConditionalEstimator, QuerySpec, ScenarioMaker};
