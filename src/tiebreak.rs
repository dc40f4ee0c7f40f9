use itertools::Itertools;

use crate::model::formation::{Pair, RankedPair, RankedPairing, COURTS};

pub type CourtOrder = [usize; COURTS];

/// Which of the three sorted double ranks coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePattern {
    Distinct,
    Leading,
    Trailing,
    Triple,
}

impl TiePattern {
    pub fn of(sorted: [usize; COURTS]) -> TiePattern {
        match (sorted[0] == sorted[1], sorted[1] == sorted[2]) {
            (true, true) => TiePattern::Triple,
            (true, false) => TiePattern::Leading,
            (false, true) => TiePattern::Trailing,
            (false, false) => TiePattern::Distinct,
        }
    }

    /// Court orders reported for this pattern. A triple tie keeps four of
    /// the six permutations.
    pub fn court_orders(self) -> &'static [CourtOrder] {
        match self {
            TiePattern::Distinct => &[[0, 1, 2]],
            TiePattern::Leading => &[[0, 1, 2], [1, 0, 2]],
            TiePattern::Trailing => &[[0, 1, 2], [0, 2, 1]],
            TiePattern::Triple => &[[0, 1, 2], [0, 2, 1], [1, 0, 2], [2, 0, 1]],
        }
    }
}

/// Court-order variants of a three-pair pairing.
///
/// Pairs are sorted by double rank, then by their lower position, and each
/// court order for the resulting tie pattern is applied to that base order.
pub fn ranked_pairings(pairing: &[Pair]) -> Vec<RankedPairing> {
    debug_assert_eq!(pairing.len(), COURTS);
    let base: Vec<RankedPair> = pairing
        .iter()
        .sorted_by_key(|pair| (pair.double_rank(), pair.min_position()))
        .map(|pair| RankedPair { pair: pair.clone(), double_rank: pair.double_rank() })
        .collect();
    let sorted = [base[0].double_rank, base[1].double_rank, base[2].double_rank];
    TiePattern::of(sorted)
        .court_orders()
        .iter()
        .map(|&order| RankedPairing { courts: order.map(|index| base[index].clone()) })
        .collect()
}
