//! Scoreboard - the single owner of a scoring session.
//!
//! The presentation layer sends [`Command`]s; the scoreboard applies each one
//! to its [`SessionState`], writes the result to the key-value store and, with
//! the `emitter` feature, notifies listeners so views can re-render.
//!
//! ## Example
//!
//! ```ignore
//! use rally_tally::{Command, InMemoryKeyValueStore, Scoreboard, Side, Slot};
//!
//! let mut board = Scoreboard::open(InMemoryKeyValueStore::new());
//! board.dispatch(Command::RenamePlayer {
//!     side: Side::Our,
//!     slot: Slot::Player1,
//!     name: "Lin".into(),
//! })?;
//! let stats = board.statistics(Side::Our);
//! ```

mod command;
mod state;

use std::num::NonZeroUsize;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::round::{Match, Side};
use crate::stats::{team_statistics, TeamStatistics};
use crate::storage::{load_state, save_state, KeyValueStore};

pub use command::{Command, CommandError, STATE_CHANGED};
pub use state::{Page, SessionState, ViewState};

pub struct Scoreboard<S: KeyValueStore> {
    state: SessionState,
    store: S,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl<S: KeyValueStore> Scoreboard<S> {
    /// Restore the last session from `store`, or start a fresh one.
    pub fn open(store: S) -> Self {
        let state = load_state(&store);
        Self {
            state,
            store,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn game(&self) -> &Match {
        &self.state.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cumulative statistics for one side over every round played so far.
    pub fn statistics(&self, side: Side) -> TeamStatistics {
        team_statistics(side, self.state.game.rounds())
    }

    /// Statistics for the side the scorer is currently viewing.
    pub fn current_statistics(&self) -> TeamStatistics {
        self.statistics(self.state.view.current_team)
    }

    /// Shorthand for [`Command::SelectRound`].
    pub fn select_round(&mut self, round: NonZeroUsize) {
        let command = Command::SelectRound { round };
        let event = command.event_name();
        self.state.game.select_round(round);
        self.settle(event);
    }

    /// Apply one command, persist, and notify listeners.
    ///
    /// Only a rejected score input fails; the state is left as it was and
    /// nothing is written or emitted.
    pub fn dispatch(&mut self, command: Command) -> Result<(), CommandError> {
        let event = command.event_name();
        log::debug!("applying {}", event);
        self.apply(command)?;
        self.settle(event);
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        let state = &mut self.state;

        match command {
            Command::SelectRound { round } => state.game.select_round(round),
            Command::UpdateTeam { side, snapshot } => {
                state.game.update_team_snapshot(side, snapshot)
            }
            Command::UpdateNotes { text } => state.game.update_notes(text),
            Command::EditCounter(edit) => state.game.apply_counter_edit(edit),
            Command::RenamePlayer { side, slot, name } => {
                state.game.rename_player(side, slot, name)
            }
            Command::SetGameName { name } => state.game.info.game_name = name,
            Command::SetScore { side, value } => {
                if let Err(err) = state.game.info.set_score(side, &value) {
                    log::debug!("rejected {} score: {}", side, err);
                    return Err(err.into());
                }
            }
            Command::SetResult { side, result } => state.game.info.set_result(side, result),
            Command::ShowStatistics => state.view.show_statistics(),
            Command::BackToGame => state.view.back_to_game(),
            Command::SwitchTeam { side } => state.view.switch_team(side),
            Command::Reset => {
                if let Err(err) = self.store.clear() {
                    log::warn!("could not clear stored session: {}", err);
                }
                state.game.reset();
                state.view = ViewState::default();
            }
        }
        Ok(())
    }

    fn settle(&mut self, event: &str) {
        self.persist();
        self.notify(event);
    }

    // Best effort: a failed write is logged and the in-memory state stands.
    fn persist(&self) {
        if let Err(err) = save_state(&self.store, &self.state) {
            log::warn!("could not persist session: {}", err);
        }
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, event: &str) {
        let payload = match serde_json::to_string(&self.state.game) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("could not serialize match for {}: {}", event, err);
                return;
            }
        };
        self.emitter.emit(event, payload.clone());
        self.emitter.emit(STATE_CHANGED, payload);
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self, _event: &str) {}

    /// Register a listener for a command event or [`STATE_CHANGED`].
    /// The listener receives the match as JSON. Returns the listener id.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener)
    }
}
