use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{CatalogError, SelectionError};
use crate::model::entity::{Name, Player, PlayerInfo, Rank};
use crate::model::formation::FORMATION_SIZE;

/// All known players, in the order the catalog file lists them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    players: Vec<Player>,
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        Catalog::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Catalog, CatalogError> {
        let records: IndexMap<Name, PlayerInfo> = serde_json::from_reader(reader)?;
        Catalog::from_records(records)
    }

    pub fn from_records(records: IndexMap<Name, PlayerInfo>) -> Result<Catalog, CatalogError> {
        let players = records
            .into_iter()
            .map(|(name, info)| Player { name, rank: info.rank, strength: info.strength })
            .collect();
        Catalog::new(players)
    }

    pub fn new(players: Vec<Player>) -> Result<Catalog, CatalogError> {
        validate(&players)?;
        debug!(players = players.len(), "catalog loaded");
        Ok(Catalog { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn lookup(&self, name: &str) -> Result<&Player, CatalogError> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .ok_or_else(|| CatalogError::MissingPlayer(name.to_string()))
    }

    /// Players whose rank is listed, kept in catalog order.
    pub fn select(&self, ranks: &[Rank]) -> Result<AvailablePool, SelectionError> {
        let wanted: BTreeSet<Rank> = ranks.iter().copied().collect();
        for rank in &wanted {
            if !self.players.iter().any(|player| player.rank == *rank) {
                warn!(rank, "no player holds this rank; ignored");
            }
        }
        let players = self
            .players
            .iter()
            .filter(|player| wanted.contains(&player.rank))
            .cloned()
            .collect();
        AvailablePool::new(players)
    }

    pub fn select_all(&self) -> Result<AvailablePool, SelectionError> {
        AvailablePool::new(self.players.clone())
    }
}

fn validate(players: &[Player]) -> Result<(), CatalogError> {
    let mut ranks: HashMap<Rank, &Name> = HashMap::new();
    for player in players {
        if player.rank == 0 {
            return Err(CatalogError::InvalidRank(player.name.clone()));
        }
        for value in [player.strength.left, player.strength.right] {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidStrength { name: player.name.clone(), value });
            }
        }
        if let Some(first) = ranks.insert(player.rank, &player.name) {
            return Err(CatalogError::DuplicateRank {
                rank: player.rank,
                first: first.clone(),
                second: player.name.clone(),
            });
        }
    }
    Ok(())
}

/// Parse space separated rank numbers into a sorted list without repeats.
pub fn parse_ranks(input: &str) -> Result<Vec<Rank>, SelectionError> {
    let ranks: BTreeSet<Rank> = input
        .split_whitespace()
        .map(|token| token.parse().map_err(|_| SelectionError::InvalidRank(token.to_string())))
        .collect::<Result<_, _>>()?;
    Ok(ranks.into_iter().collect())
}

/// Players eligible for a formation. Holds at least six by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailablePool {
    players: Vec<Player>,
}

impl AvailablePool {
    fn new(players: Vec<Player>) -> Result<AvailablePool, SelectionError> {
        if players.len() < FORMATION_SIZE {
            return Err(SelectionError::InsufficientPlayers {
                found: players.len(),
                required: FORMATION_SIZE,
            });
        }
        Ok(AvailablePool { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
