use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::entity::{Player, Strength};
use crate::model::formation::{Pair, RankedPair, RankedPairing, ScoredFormation, ScoredPair};

/// Best of the two ways a pair can split the left and right sides.
pub fn double_strength(a: &Player, b: &Player) -> Strength {
    let left_right = a.strength.left + b.strength.right;
    let right_left = a.strength.right + b.strength.left;
    left_right.max(right_left)
}

pub fn pair_strength(catalog: &Catalog, pair: &Pair) -> Result<Strength, CatalogError> {
    let [a, b] = pair.names();
    Ok(double_strength(catalog.lookup(a)?, catalog.lookup(b)?))
}

pub fn score(catalog: &Catalog, ranked: &RankedPairing) -> Result<ScoredFormation, CatalogError> {
    let score_court = |court: &RankedPair| -> Result<ScoredPair, CatalogError> {
        Ok(ScoredPair {
            pair: court.pair.clone(),
            double_rank: court.double_rank,
            double_strength: pair_strength(catalog, &court.pair)?,
        })
    };
    let [first, second, third] = &ranked.courts;
    let courts = [score_court(first)?, score_court(second)?, score_court(third)?];
    let total = courts.iter().map(|court| court.double_strength).sum();
    Ok(ScoredFormation { courts, total })
}
