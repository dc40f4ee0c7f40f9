use tracing::{debug, info};

use crate::catalog::{AvailablePool, Catalog};
use crate::error::CatalogError;
use crate::model::entity::Strength;
use crate::model::formation::{PositionedFormation, RankedPairing, ScoredFormation};
use crate::{pairing, ranker, strength, subset, tiebreak};

/// Runs the whole enumeration for one catalog and one pool of available
/// players. Everything is produced in a fixed order: selections, then
/// pairings within a selection, then court-order variants.
pub struct FormationEngine {
    catalog: Catalog,
    pool: AvailablePool,
}

impl FormationEngine {
    pub fn new(catalog: Catalog, pool: AvailablePool) -> FormationEngine {
        FormationEngine { catalog, pool }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pool(&self) -> &AvailablePool {
        &self.pool
    }

    pub fn formations(&self) -> impl Iterator<Item = PositionedFormation> + '_ {
        subset::formations(&self.pool)
    }

    pub fn ranked_pairings(&self, formation: &PositionedFormation) -> Vec<RankedPairing> {
        pairing::pairings(formation)
            .iter()
            .flat_map(|pairing| tiebreak::ranked_pairings(pairing))
            .collect()
    }

    pub fn all_ranked_pairings(&self) -> Vec<RankedPairing> {
        self.formations()
            .flat_map(|formation| self.ranked_pairings(&formation))
            .collect()
    }

    pub fn score(&self, ranked: &RankedPairing) -> Result<ScoredFormation, CatalogError> {
        strength::score(&self.catalog, ranked)
    }

    pub fn scored_formations(&self) -> Result<Vec<ScoredFormation>, CatalogError> {
        let mut scored = Vec::new();
        for (index, formation) in self.formations().enumerate() {
            let ranked = self.ranked_pairings(&formation);
            debug!(formation = index, variants = ranked.len(), "formation expanded");
            for variant in &ranked {
                scored.push(self.score(variant)?);
            }
        }
        info!(pool = self.pool.len(), candidates = scored.len(), "formations scored");
        Ok(scored)
    }

    pub fn strongest(&self, n: usize) -> Result<Vec<ScoredFormation>, CatalogError> {
        let scored = self.scored_formations()?;
        Ok(ranker::strongest(&scored, n))
    }

    pub fn max_strength(&self) -> Result<Option<Strength>, CatalogError> {
        let scored = self.scored_formations()?;
        Ok(scored.iter().map(|formation| formation.total).reduce(Strength::max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Player;

    fn engine(players: Vec<Player>) -> FormationEngine {
        let catalog = Catalog::new(players).unwrap();
        let pool = catalog.select_all().unwrap();
        FormationEngine::new(catalog, pool)
    }

    fn equal_players(count: u32) -> Vec<Player> {
        (1..=count).map(|rank| Player::new(format!("P{rank}"), rank, 1.0, 1.0)).collect()
    }

    #[test]
    fn six_players_expand_to_fixed_variant_count() {
        let engine = engine(equal_players(6));
        let formation = engine.formations().next().unwrap();
        let ranked = engine.ranked_pairings(&formation);
        let mut counts = [0usize; 5];
        for pairing in pairing::pairings(&formation) {
            counts[tiebreak::ranked_pairings(&pairing).len()] += 1;
        }
        assert_eq!(counts.iter().sum::<usize>(), 15);
        assert_eq!(ranked.len(), counts[1] + 2 * counts[2] + 4 * counts[4]);
        assert_eq!(counts, [0, 10, 4, 0, 1]);
        assert_eq!(ranked.len(), 22);
    }

    #[test]
    fn equal_strengths_tie_in_generation_order() {
        let engine = engine(equal_players(7));
        let all = engine.scored_formations().unwrap();
        assert!(all.iter().all(|f| f.total == 6.0));
        assert!(all.iter().all(|f| f.courts.iter().all(|c| c.double_strength == 2.0)));
        let top = engine.strongest(all.len() + 5).unwrap();
        assert_eq!(top, all);
        assert_eq!(engine.max_strength().unwrap(), Some(6.0));
    }

    #[test]
    fn strongest_pairs_lead() {
        let mut players = equal_players(6);
        players[0].strength.left = 10.0;
        players[1].strength.right = 10.0;
        let engine = engine(players);
        let top = engine.strongest(1).unwrap();
        assert_eq!(top[0].total, 24.0);
        assert!(top[0].courts.iter().any(|c| c.pair.names() == ["P1", "P2"]));
    }
}
