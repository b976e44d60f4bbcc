//! This module is responsible for loading maps and queries from text files
//! and assembling them into a routing scenario.

mod builder;
mod config;
mod map;
mod parser;
mod queries;

pub use builder::{Scenario, load_scenario};
pub use config::ScenarioConfig;
pub use map::{parse_map, read_map};
pub use queries::{parse_queries, read_queries};
