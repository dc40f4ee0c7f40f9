use std::path::PathBuf;

use thiserror::Error;

use crate::model::entity::{Name, Rank};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
    #[error("rank {rank} is shared by {first} and {second}")]
    DuplicateRank { rank: Rank, first: Name, second: Name },
    #[error("player {0} has rank 0; ranks start at 1")]
    InvalidRank(Name),
    #[error("player {name} has invalid strength {value}")]
    InvalidStrength { name: Name, value: f64 },
    #[error("no catalog entry for player {0}")]
    MissingPlayer(Name),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("invalid rank {0:?}; expected space separated numbers")]
    InvalidRank(String),
    #[error("only {found} players selected, at least {required} required")]
    InsufficientPlayers { found: usize, required: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("top must be greater than zero")]
    ZeroTop,
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}
