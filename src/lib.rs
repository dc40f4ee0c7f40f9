pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod pairing;
pub mod ranker;
pub mod report;
pub mod strength;
pub mod subset;
pub mod tiebreak;

pub use catalog::{parse_ranks, AvailablePool, Catalog};
pub use engine::FormationEngine;
pub use error::{CatalogError, ConfigError, SelectionError};
