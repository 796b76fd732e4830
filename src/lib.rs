mod round;
mod score;
mod session;
mod stats;
mod storage;

pub use round::{
    round_options, validate_score, CounterEdit, Match, MatchInfo, MatchResult, Round,
    ScoreInputError, Side, Slot, TeamScores, TeamSnapshot, MAX_ROUNDS, ROUND_OPTIONS,
};
pub use score::{
    apply_delta, BinaryCategory, BinaryCounter, Bucket, CounterKey, Direction, PlayerScoreSheet,
    ScalarMetric,
};
pub use session::{
    Command, CommandError, Page, Scoreboard, SessionState, ViewState, STATE_CHANGED,
};
pub use stats::{
    aggregate_player, success_fail_rate, team_statistics, PlayerStatistics, SuccessFailRate,
    TeamStatistics,
};
pub use storage::{
    keys, load_state, save_state, InMemoryKeyValueStore, KeyValueStore, StorageError,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
