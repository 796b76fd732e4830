use std::num::NonZeroUsize;

use rally_tally::{BinaryCounter, PlayerScoreSheet, TeamScores, TeamSnapshot};

pub fn round(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("round numbers start at 1")
}

/// A sheet with a recognizable value in every field.
pub fn marked_sheet(seed: u32) -> PlayerScoreSheet {
    PlayerScoreSheet {
        attack: BinaryCounter::new(seed, seed + 1),
        defense: BinaryCounter::new(seed + 2, seed + 3),
        midfield: BinaryCounter::new(seed + 4, 0),
        chance: BinaryCounter::new(0, seed + 5),
        smash: BinaryCounter::new(seed + 6, seed + 7),
        first_serve_rate: seed + 8,
        receive_error_rate: seed + 9,
        serve_points: seed + 10,
        double_faults: seed + 11,
    }
}

pub fn marked_team(names: (&str, &str), seed: u32) -> TeamSnapshot {
    TeamSnapshot {
        player1_name: names.0.to_string(),
        player2_name: names.1.to_string(),
        scores: TeamScores {
            player1: marked_sheet(seed),
            player2: marked_sheet(seed + 100),
        },
    }
}
