//! Cumulative statistics over a match's rounds.
//!
//! Everything here is recomputed from the full round list on each call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::round::{Round, Side, Slot};
use crate::score::{BinaryCounter, PlayerScoreSheet};

/// Success and fail shares, each formatted with one decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFailRate {
    pub success_rate: String,
    pub fail_rate: String,
}

impl SuccessFailRate {
    /// Rates for the given totals. No attempts gives `0.0` for both.
    pub fn from_totals(totals: &BinaryCounter) -> Self {
        let total = u64::from(totals.success) + u64::from(totals.fail);
        Self {
            success_rate: percent(u64::from(totals.success), total),
            fail_rate: percent(u64::from(totals.fail), total),
        }
    }
}

impl fmt::Display for SuccessFailRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% / {}%", self.success_rate, self.fail_rate)
    }
}

// Rounded to tenths, halves rounding up.
fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let tenths = (2000 * part + total) / (2 * total);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Field-wise sum of one player's sheets over `rounds`. Order does not matter.
pub fn aggregate_player(side: Side, slot: Slot, rounds: &[Round]) -> PlayerScoreSheet {
    rounds
        .iter()
        .fold(PlayerScoreSheet::zero(), |mut totals, round| {
            totals.merge(round.sheet(side, slot));
            totals
        })
}

/// Success/fail split of a player's rally categories across `rounds`.
/// Serve metrics are not counted.
pub fn success_fail_rate(side: Side, slot: Slot, rounds: &[Round]) -> SuccessFailRate {
    let totals = aggregate_player(side, slot, rounds).binary_totals();
    SuccessFailRate::from_totals(&totals)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub slot: Slot,
    pub name: String,
    pub totals: PlayerScoreSheet,
    pub rates: SuccessFailRate,
}

/// Both players of one side, as shown on the statistics board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub side: Side,
    pub player1: PlayerStatistics,
    pub player2: PlayerStatistics,
}

impl TeamStatistics {
    pub fn player(&self, slot: Slot) -> &PlayerStatistics {
        match slot {
            Slot::Player1 => &self.player1,
            Slot::Player2 => &self.player2,
        }
    }
}

/// Statistics for both players of `side`. Names come from the last round, so
/// a renamed player is reported under their latest name.
pub fn team_statistics(side: Side, rounds: &[Round]) -> TeamStatistics {
    let player = |slot: Slot| {
        let totals = aggregate_player(side, slot, rounds);
        let rates = SuccessFailRate::from_totals(&totals.binary_totals());
        PlayerStatistics {
            slot,
            name: rounds
                .last()
                .map(|round| round.team(side).name(slot).to_string())
                .unwrap_or_default(),
            totals,
            rates,
        }
    };
    TeamStatistics {
        side,
        player1: player(Slot::Player1),
        player2: player(Slot::Player2),
    }
}
