use std::fmt::Write;

use itertools::Itertools;

use crate::engine::FormationEngine;
use crate::error::CatalogError;
use crate::model::entity::Player;
use crate::model::formation::{PositionedFormation, ScoredFormation};

const RULE_WIDTH: usize = 30;
const BANNER_WIDTH: usize = 210;

pub fn players_table<'a>(header: &str, players: impl IntoIterator<Item = &'a Player>) -> String {
    let mut out = format!("{header}\n{}\n", "-".repeat(RULE_WIDTH));
    for player in players {
        let _ = writeln!(out, "{:>2}: {}", player.rank, player.name);
    }
    out
}

pub fn formation_banner(formation: &PositionedFormation) -> String {
    let seats: String = formation
        .seats
        .iter()
        .map(|seat| format!("[{}] {:<30}", seat.position, seat.name))
        .collect();
    let rule = "-".repeat(BANNER_WIDTH);
    format!("{rule}\n{:^width$}\n{rule}\n{seats}\n{rule}", "FORMATION:", width = BANNER_WIDTH)
}

/// Court by court with player names.
pub fn scored_line(scored: &ScoredFormation) -> String {
    let courts = scored
        .courts
        .iter()
        .map(|court| {
            let [a, b] = court.pair.names();
            let strength = format!(" [strength = {}]", court.double_strength);
            format!("{a:>25} + {b:<25}{strength:<20}")
        })
        .map(|court| format!("{court:<70}"))
        .join(" || ");
    format!("{courts}   [total strength = {}]", scored.total)
}

/// Court by court with positions and double ranks.
pub fn positioned_line(scored: &ScoredFormation) -> String {
    let courts: String = scored
        .courts
        .iter()
        .map(|court| {
            let text = format!(
                "[{}] + [{}] = [{:>2}] [strength = {}]",
                court.pair.0.position, court.pair.1.position, court.double_rank, court.double_strength
            );
            format!("{text:<40}")
        })
        .collect();
    format!("{courts}   [total strength = {}]", scored.total)
}

/// Every formation with all of its scored court orders.
pub fn formations_overview(engine: &FormationEngine) -> Result<String, CatalogError> {
    let mut out = String::new();
    for formation in engine.formations() {
        let _ = writeln!(out, "\n{}", formation_banner(&formation));
        for ranked in engine.ranked_pairings(&formation) {
            let _ = writeln!(out, "{}", positioned_line(&engine.score(&ranked)?));
        }
    }
    Ok(out)
}
