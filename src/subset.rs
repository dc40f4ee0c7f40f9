use itertools::Itertools;

use crate::catalog::AvailablePool;
use crate::model::formation::{PositionedFormation, FORMATION_SIZE};

/// Every six-player selection of the pool, lazily, in combination order.
/// Members are seated 1..=6 in pool order.
pub fn formations(pool: &AvailablePool) -> impl Iterator<Item = PositionedFormation> + '_ {
    pool.players()
        .iter()
        .combinations(FORMATION_SIZE)
        .map(|players| PositionedFormation::new(&players))
}
