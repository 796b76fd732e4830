use std::fmt;

use serde::{Deserialize, Serialize};

use crate::score::PlayerScoreSheet;

/// Which side of the net a team plays on, from the scorer's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    #[default]
    Our,
    Enemy,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Our => Side::Enemy,
            Side::Enemy => Side::Our,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Our => write!(f, "our"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Fixed roster position. A slot keeps its scores across renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Player1,
    Player2,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Player1, Slot::Player2];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Player1 => write!(f, "player1"),
            Slot::Player2 => write!(f, "player2"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    pub player1: PlayerScoreSheet,
    pub player2: PlayerScoreSheet,
}

impl TeamScores {
    pub fn get(&self, slot: Slot) -> &PlayerScoreSheet {
        match slot {
            Slot::Player1 => &self.player1,
            Slot::Player2 => &self.player2,
        }
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut PlayerScoreSheet {
        match slot {
            Slot::Player1 => &mut self.player1,
            Slot::Player2 => &mut self.player2,
        }
    }
}

/// A side's roster names and both players' sheets for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    #[serde(alias = "player1")]
    pub player1_name: String,
    #[serde(alias = "player2")]
    pub player2_name: String,
    pub scores: TeamScores,
}

impl TeamSnapshot {
    /// Zeroed sheets under the given roster names.
    pub fn with_names(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            scores: TeamScores::default(),
        }
    }

    pub fn name(&self, slot: Slot) -> &str {
        match slot {
            Slot::Player1 => &self.player1_name,
            Slot::Player2 => &self.player2_name,
        }
    }

    pub fn set_name(&mut self, slot: Slot, name: impl Into<String>) {
        match slot {
            Slot::Player1 => self.player1_name = name.into(),
            Slot::Player2 => self.player2_name = name.into(),
        }
    }

    /// Copy roster names from `other`, leaving scores untouched.
    pub fn adopt_names(&mut self, other: &TeamSnapshot) {
        self.player1_name.clone_from(&other.player1_name);
        self.player2_name.clone_from(&other.player2_name);
    }

    /// A zeroed snapshot that keeps this team's roster names.
    pub fn fresh(&self) -> Self {
        Self::with_names(self.player1_name.clone(), self.player2_name.clone())
    }
}

/// One unit of match data. Its only identity is its position in the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub our_team: TeamSnapshot,
    pub enemy_team: TeamSnapshot,
    pub notes: String,
}

impl Round {
    /// All counters zero, names empty, no notes.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A zeroed round that inherits both rosters from `previous`.
    pub fn following(previous: &Round) -> Self {
        Self {
            our_team: previous.our_team.fresh(),
            enemy_team: previous.enemy_team.fresh(),
            notes: String::new(),
        }
    }

    pub fn team(&self, side: Side) -> &TeamSnapshot {
        match side {
            Side::Our => &self.our_team,
            Side::Enemy => &self.enemy_team,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut TeamSnapshot {
        match side {
            Side::Our => &mut self.our_team,
            Side::Enemy => &mut self.enemy_team,
        }
    }

    pub fn sheet(&self, side: Side, slot: Slot) -> &PlayerScoreSheet {
        self.team(side).scores.get(slot)
    }
}
