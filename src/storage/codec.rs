use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::round::{Match, MatchInfo, MatchResult, Round};
use crate::session::{SessionState, ViewState};

use super::{keys, KeyValueStore, StorageError};

// Missing, unreadable and malformed values all come back as None.
fn read<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_value(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("could not read {}: {}", key, err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed {}: {}", key, err);
            None
        }
    }
}

fn write<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    store.set_value(key, serde_json::to_string(value)?)
}

/// Load a session, substituting defaults for anything missing or malformed.
///
/// A round list that is not an array, is empty, or holds a round missing
/// any field is replaced by the initial one-round match, cursor included.
pub fn load_state(store: &dyn KeyValueStore) -> SessionState {
    let info = MatchInfo {
        game_name: read(store, keys::GAME_NAME).unwrap_or_default(),
        our_score: read(store, keys::OUR_SCORE).unwrap_or_default(),
        enemy_score: read(store, keys::ENEMY_SCORE).unwrap_or_default(),
        our_result: read::<Option<MatchResult>>(store, keys::OUR_RESULT).flatten(),
        enemy_result: read::<Option<MatchResult>>(store, keys::ENEMY_RESULT).flatten(),
    };

    let rounds: Vec<Round> = read(store, keys::ROUNDS_DATA).unwrap_or_default();
    let game = if rounds.is_empty() {
        Match::from_parts(Vec::new(), 1, info)
    } else {
        let current_round: usize = read(store, keys::CURRENT_ROUND).unwrap_or(1);
        Match::from_parts(rounds, current_round, info)
    };

    let defaults = ViewState::default();
    let view = ViewState {
        show_statistics: read(store, keys::SHOW_STATISTICS).unwrap_or(defaults.show_statistics),
        current_team: read(store, keys::CURRENT_TEAM).unwrap_or(defaults.current_team),
        current_page: read(store, keys::CURRENT_PAGE).unwrap_or(defaults.current_page),
    };

    SessionState { game, view }
}

/// Write every persisted key for `state`.
pub fn save_state(store: &dyn KeyValueStore, state: &SessionState) -> Result<(), StorageError> {
    let info = &state.game.info;
    write(store, keys::GAME_NAME, &info.game_name)?;
    write(store, keys::OUR_SCORE, &info.our_score)?;
    write(store, keys::ENEMY_SCORE, &info.enemy_score)?;
    write(store, keys::OUR_RESULT, &info.our_result)?;
    write(store, keys::ENEMY_RESULT, &info.enemy_result)?;
    write(store, keys::CURRENT_ROUND, &state.game.current_round())?;
    write(store, keys::ROUNDS_DATA, state.game.rounds())?;
    write(store, keys::SHOW_STATISTICS, &state.view.show_statistics)?;
    write(store, keys::CURRENT_TEAM, &state.view.current_team)?;
    write(store, keys::CURRENT_PAGE, &state.view.current_page)?;
    Ok(())
}
