use itertools::Itertools;

use crate::model::formation::ScoredFormation;

/// The `n` strongest formations, strongest first. Equal totals keep the
/// order they were generated in.
pub fn strongest(formations: &[ScoredFormation], n: usize) -> Vec<ScoredFormation> {
    formations
        .iter()
        .sorted_by(|a, b| b.total.total_cmp(&a.total))
        .take(n)
        .cloned()
        .collect()
}
