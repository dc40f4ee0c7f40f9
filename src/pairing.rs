use crate::model::formation::{Pair, Pairing, PositionedFormation};

/// Every partition of `items` into unordered pairs.
///
/// The first remaining item is paired with each later item in turn and the
/// rest is partitioned recursively, so the output order is fixed. For an odd
/// count each item is dropped in turn before recursing; fewer than two items
/// give a single empty partition.
pub fn all_pairs<T: Clone>(items: &[T]) -> Vec<Vec<(T, T)>> {
    if items.len() < 2 {
        return vec![Vec::new()];
    }
    if items.len() % 2 == 1 {
        return (0..items.len())
            .flat_map(|skip| all_pairs(&without(items, &[skip])))
            .collect();
    }
    let first = &items[0];
    (1..items.len())
        .flat_map(|partner| {
            let pair = (first.clone(), items[partner].clone());
            all_pairs(&without(items, &[0, partner]))
                .into_iter()
                .map(move |rest| {
                    let mut pairing = Vec::with_capacity(rest.len() + 1);
                    pairing.push(pair.clone());
                    pairing.extend(rest);
                    pairing
                })
        })
        .collect()
}

fn without<T: Clone>(items: &[T], skipped: &[usize]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(index, _)| !skipped.contains(index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// The fifteen ways to split a six-player formation into three pairs.
pub fn pairings(formation: &PositionedFormation) -> Vec<Pairing> {
    all_pairs(&formation.seats)
        .into_iter()
        .map(|pairs| pairs.into_iter().map(|(a, b)| Pair(a, b)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;
    use crate::model::entity::Player;

    fn canonical(pairing: &[(u32, u32)]) -> BTreeSet<(u32, u32)> {
        pairing.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn six_items_give_fifteen_distinct_perfect_matchings() {
        let all = all_pairs(&[1u32, 2, 3, 4, 5, 6]);
        assert_eq!(all.len(), 15);
        let distinct: HashSet<_> = all.iter().map(|p| canonical(p)).collect();
        assert_eq!(distinct.len(), 15);
        for pairing in &all {
            let mut covered: Vec<u32> = pairing.iter().flat_map(|&(a, b)| [a, b]).collect();
            covered.sort();
            assert_eq!(covered, [1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn follows_first_item_partner_order() {
        let all = all_pairs(&[1u32, 2, 3, 4, 5, 6]);
        assert_eq!(all[0], [(1, 2), (3, 4), (5, 6)]);
        assert_eq!(all[1], [(1, 2), (3, 5), (4, 6)]);
        assert_eq!(all[2], [(1, 2), (3, 6), (4, 5)]);
        assert_eq!(all[3], [(1, 3), (2, 4), (5, 6)]);
        assert_eq!(all[14], [(1, 6), (2, 5), (3, 4)]);
    }

    #[test]
    fn double_factorial_counts() {
        assert_eq!(all_pairs(&[1u32, 2]).len(), 1);
        assert_eq!(all_pairs(&[1u32, 2, 3, 4]).len(), 3);
        assert_eq!(all_pairs(&[1u32, 2, 3, 4, 5, 6, 7, 8]).len(), 105);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(all_pairs::<u32>(&[]), vec![Vec::<(u32, u32)>::new()]);
        assert_eq!(all_pairs(&[1u32]), vec![Vec::<(u32, u32)>::new()]);
        // each of the three items is left out once
        assert_eq!(all_pairs(&[1u32, 2, 3]), vec![vec![(2, 3)], vec![(1, 3)], vec![(1, 2)]]);
    }

    #[test]
    fn pairs_formation_seats() {
        let players: Vec<Player> = (1..=6).map(|r| Player::new(format!("P{r}"), r, 1.0, 1.0)).collect();
        let refs: Vec<&Player> = players.iter().collect();
        let formation = PositionedFormation::new(&refs);
        let all = pairings(&formation);
        assert_eq!(all.len(), 15);
        let last = &all[14];
        let ranks: Vec<_> = last.iter().map(Pair::double_rank).collect();
        assert_eq!(ranks, [7, 7, 7]);
        assert_eq!(last[0].names(), ["P1", "P6"]);
    }
}
