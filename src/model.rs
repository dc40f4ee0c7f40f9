pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type Name = String;
    pub type Rank = u32;
    pub type Strength = f64;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Handedness {
        pub left: Strength,
        pub right: Strength,
    }

    /// One catalog record, keyed by player name in the catalog file.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PlayerInfo {
        pub rank: Rank,
        pub strength: Handedness,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Player {
        pub name: Name,
        pub rank: Rank,
        pub strength: Handedness,
    }

    impl Player {
        pub fn new(name: impl Into<Name>, rank: Rank, left: Strength, right: Strength) -> Player {
            Player {
                name: name.into(),
                rank,
                strength: Handedness { left, right },
            }
        }
    }
}


pub mod formation {
    use serde::Serialize;
    use super::entity::{Name, Player, Strength};

    /// 1-based slot of a player inside one six-player selection.
    pub type Position = usize;
    pub type DoubleRank = usize;

    pub const FORMATION_SIZE: usize = 6;
    pub const COURTS: usize = 3;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct Seat {
        pub name: Name,
        pub position: Position,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct Pair(pub Seat, pub Seat);

    impl Pair {
        pub fn double_rank(&self) -> DoubleRank {
            self.0.position + self.1.position
        }

        pub fn min_position(&self) -> Position {
            self.0.position.min(self.1.position)
        }

        pub fn names(&self) -> [&str; 2] {
            [&self.0.name, &self.1.name]
        }
    }

    pub type Pairing = Vec<Pair>;

    /// A six-player selection with each member seated at the position its
    /// enumeration order gave it.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PositionedFormation {
        pub seats: Vec<Seat>,
    }

    impl PositionedFormation {
        pub fn new(players: &[&Player]) -> PositionedFormation {
            let seats = players
                .iter()
                .zip(1..)
                .map(|(player, position)| Seat { name: player.name.clone(), position })
                .collect();
            PositionedFormation { seats }
        }

        pub fn position_of(&self, name: &str) -> Option<Position> {
            self.seats.iter().find(|seat| seat.name == name).map(|seat| seat.position)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct RankedPair {
        pub pair: Pair,
        pub double_rank: DoubleRank,
    }

    /// Three pairs in court order: first, second, third.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct RankedPairing {
        pub courts: [RankedPair; COURTS],
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ScoredPair {
        pub pair: Pair,
        pub double_rank: DoubleRank,
        pub double_strength: Strength,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ScoredFormation {
        pub courts: [ScoredPair; COURTS],
        pub total: Strength,
    }
}
