use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::round::{CounterEdit, MatchResult, ScoreInputError, Side, Slot, TeamSnapshot};

/// Emitted after every command, in addition to the command's own event.
pub const STATE_CHANGED: &str = "StateChanged";

/// One scorer action. The scoreboard applies commands one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Command {
    SelectRound { round: NonZeroUsize },
    UpdateTeam { side: Side, snapshot: TeamSnapshot },
    UpdateNotes { text: String },
    EditCounter(CounterEdit),
    RenamePlayer { side: Side, slot: Slot, name: String },
    SetGameName { name: String },
    SetScore { side: Side, value: String },
    SetResult { side: Side, result: Option<MatchResult> },
    ShowStatistics,
    BackToGame,
    SwitchTeam { side: Side },
    Reset,
}

impl Command {
    /// Name of the event fired once this command has been applied.
    pub fn event_name(&self) -> &'static str {
        match self {
            Command::SelectRound { .. } => "RoundSelected",
            Command::UpdateTeam { .. } => "TeamUpdated",
            Command::UpdateNotes { .. } => "NotesUpdated",
            Command::EditCounter(_) => "CounterEdited",
            Command::RenamePlayer { .. } => "PlayerRenamed",
            Command::SetGameName { .. } | Command::SetScore { .. } | Command::SetResult { .. } => {
                "MatchInfoUpdated"
            }
            Command::ShowStatistics | Command::BackToGame | Command::SwitchTeam { .. } => {
                "ViewChanged"
            }
            Command::Reset => "MatchReset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidScore(ScoreInputError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidScore(err) => write!(f, "invalid score input: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidScore(err) => Some(err),
        }
    }
}

impl From<ScoreInputError> for CommandError {
    fn from(err: ScoreInputError) -> Self {
        CommandError::InvalidScore(err)
    }
}
