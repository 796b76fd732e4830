//! The round sequence of a match and the rules for editing it.
//!
//! Roster names are match-wide: a name set in any round is written to every
//! round for that side. Score sheets belong to a single round.

mod info;
mod snapshot;
mod store;

pub use info::{round_options, validate_score, MatchInfo, MatchResult, ScoreInputError, ROUND_OPTIONS};
pub use snapshot::{Round, Side, Slot, TeamScores, TeamSnapshot};
pub use store::{CounterEdit, Match, MAX_ROUNDS};
