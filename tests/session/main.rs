//! Scoreboard sessions: dispatch, persistence across reloads, reset and
//! change notification.


use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;

use rally_tally::{
    keys, BinaryCategory, Command, CommandError, CounterEdit, CounterKey, Direction,
    InMemoryKeyValueStore, KeyValueStore, MatchResult, Page, Round, ScoreInputError, MAX_ROUNDS,
    Scoreboard, SessionState, Side, Slot,
};
use support::ReadOnlyStore;

fn round(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn tap(side: Side, slot: Slot, key: CounterKey) -> Command {
    Command::EditCounter(CounterEdit {
        side,
        slot,
        key,
        direction: Direction::Increment,
    })
}

// ============================================================================
// Dispatch and reload
// ============================================================================

#[test]
fn fresh_store_opens_initial_session() {
    let board = Scoreboard::open(InMemoryKeyValueStore::new());
    assert_eq!(*board.state(), SessionState::default());
    assert_eq!(board.game().len(), 1);
}

#[test]
fn session_survives_reload() {
    let store = InMemoryKeyValueStore::new();
    {
        let mut board = Scoreboard::open(store.clone());
        board
            .dispatch(Command::SetGameName {
                name: "Spring league".into(),
            })
            .unwrap();
        board
            .dispatch(Command::RenamePlayer {
                side: Side::Our,
                slot: Slot::Player1,
                name: "Lin".into(),
            })
            .unwrap();
        board
            .dispatch(tap(Side::Our, Slot::Player1, CounterKey::success(BinaryCategory::Attack)))
            .unwrap();
        board.select_round(round(3));
        board
            .dispatch(Command::UpdateNotes {
                text: "switch to defense".into(),
            })
            .unwrap();
        board
            .dispatch(Command::SetScore {
                side: Side::Enemy,
                value: "19".into(),
            })
            .unwrap();
        board
            .dispatch(Command::SetResult {
                side: Side::Our,
                result: Some(MatchResult::Win),
            })
            .unwrap();
        board.dispatch(Command::SwitchTeam { side: Side::Enemy }).unwrap();
    }

    let reloaded = Scoreboard::open(store);
    let game = reloaded.game();
    assert_eq!(game.info.game_name, "Spring league");
    assert_eq!(game.info.enemy_score, "19");
    assert_eq!(game.info.our_result, Some(MatchResult::Win));
    assert_eq!(game.len(), 3);
    assert_eq!(game.current_round().get(), 3);
    assert_eq!(game.current().notes, "switch to defense");
    assert_eq!(game.round(1).unwrap().our_team.scores.player1.attack.success, 1);
    assert_eq!(game.round(3).unwrap().our_team.player1_name, "Lin");
    assert_eq!(reloaded.state().view.current_team, Side::Enemy);
}

#[test]
fn rejected_score_leaves_state_and_store_untouched() {
    let store = InMemoryKeyValueStore::new();
    let mut board = Scoreboard::open(store.clone());
    board
        .dispatch(Command::SetScore {
            side: Side::Our,
            value: "7".into(),
        })
        .unwrap();

    let err = board
        .dispatch(Command::SetScore {
            side: Side::Our,
            value: "100".into(),
        })
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidScore(ScoreInputError::TooLong(3)));
    assert_eq!(board.game().info.our_score, "7");
    assert_eq!(store.get_value(keys::OUR_SCORE).unwrap().as_deref(), Some("\"7\""));
}

#[test]
fn rejected_score_is_neither_saved_nor_announced() {
    let store = ReadOnlyStore::default();
    let mut board = Scoreboard::open(store.clone());

    let err = board
        .dispatch(Command::SetScore {
            side: Side::Enemy,
            value: "1a".into(),
        })
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidScore(ScoreInputError::NotDigits("1a".into())));
    assert_eq!(board.game().info.enemy_score, "");
    assert_eq!(store.rejected_writes.load(Ordering::SeqCst), 0);
}

#[test]
fn oversized_round_selection_is_capped() {
    let store = InMemoryKeyValueStore::new();
    let mut board = Scoreboard::open(store.clone());

    let command: Command =
        serde_json::from_str(r#"{"type":"selectRound","round":2000000}"#).unwrap();
    board.dispatch(command).unwrap();
    assert_eq!(board.game().len(), MAX_ROUNDS);
    assert_eq!(board.game().current_round().get(), MAX_ROUNDS);

    let reopened = Scoreboard::open(store);
    assert_eq!(reopened.game().len(), MAX_ROUNDS);
}

#[test]
fn statistics_view_toggles() {
    let mut board = Scoreboard::open(InMemoryKeyValueStore::new());
    board.dispatch(Command::ShowStatistics).unwrap();
    assert!(board.state().view.show_statistics);
    assert_eq!(board.state().view.current_page, Page::Statistics);

    board.dispatch(Command::BackToGame).unwrap();
    assert!(!board.state().view.show_statistics);
    assert_eq!(board.state().view.current_page, Page::Game);
}

#[test]
fn statistics_cover_all_rounds() {
    let mut board = Scoreboard::open(InMemoryKeyValueStore::new());
    let key = CounterKey::success(BinaryCategory::Chance);
    board.dispatch(tap(Side::Enemy, Slot::Player2, key)).unwrap();
    board.select_round(round(2));
    board.dispatch(tap(Side::Enemy, Slot::Player2, key)).unwrap();
    board.dispatch(tap(Side::Enemy, Slot::Player2, CounterKey::fail(BinaryCategory::Chance))).unwrap();
    board.dispatch(Command::SwitchTeam { side: Side::Enemy }).unwrap();

    let stats = board.current_statistics();
    assert_eq!(stats.side, Side::Enemy);
    assert_eq!(stats.player2.totals.chance.success, 2);
    assert_eq!(stats.player2.rates.success_rate, "66.7");
    assert_eq!(stats.player2.rates.fail_rate, "33.3");
    assert!(board.statistics(Side::Our).player2.totals.is_zero());
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_restores_defaults_and_rewrites_store() {
    let store = InMemoryKeyValueStore::new();
    store.set_value("unrelated", "1".into()).unwrap();
    let mut board = Scoreboard::open(store.clone());
    board.select_round(round(6));
    board
        .dispatch(Command::SetGameName {
            name: "Final".into(),
        })
        .unwrap();
    board.dispatch(Command::ShowStatistics).unwrap();

    board.dispatch(Command::Reset).unwrap();

    assert_eq!(*board.state(), SessionState::default());
    assert!(store.get_value("unrelated").unwrap().is_none());
    assert_eq!(store.get_value(keys::CURRENT_ROUND).unwrap().as_deref(), Some("1"));
    let rounds: Vec<Round> =
        serde_json::from_str(&store.get_value(keys::ROUNDS_DATA).unwrap().unwrap()).unwrap();
    assert_eq!(rounds, vec![Round::zero()]);
}

// ============================================================================
// Persistence failures
// ============================================================================

#[test]
fn failed_writes_do_not_block_transitions() {
    let store = ReadOnlyStore::default();
    let mut board = Scoreboard::open(store.clone());

    board.select_round(round(2));
    board
        .dispatch(Command::UpdateNotes {
            text: "still recorded".into(),
        })
        .unwrap();
    board.dispatch(Command::Reset).unwrap();
    board
        .dispatch(Command::UpdateNotes {
            text: "after reset".into(),
        })
        .unwrap();

    assert_eq!(board.game().len(), 1);
    assert_eq!(board.game().current().notes, "after reset");
    assert!(store.rejected_writes.load(Ordering::SeqCst) >= 4);
}

#[test]
fn corrupted_rounds_open_as_fresh_match() {
    let store = InMemoryKeyValueStore::new();
    store.set_value(keys::ROUNDS_DATA, "[{\"ourTeam\":1}]".into()).unwrap();
    store.set_value(keys::CURRENT_ROUND, "5".into()).unwrap();
    store.set_value(keys::CURRENT_TEAM, "\"enemy\"".into()).unwrap();

    let board = Scoreboard::open(store);
    assert_eq!(board.game().len(), 1);
    assert_eq!(board.game().current_round().get(), 1);
    assert_eq!(board.state().view.current_team, Side::Enemy);
}

// ============================================================================
// Change notification
// ============================================================================

#[cfg(feature = "emitter")]
mod notifications {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    use rally_tally::{Match, STATE_CHANGED};

    #[test]
    fn listeners_receive_match_json() {
        let mut board = Scoreboard::open(InMemoryKeyValueStore::new());
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&seen);
        board.on("NotesUpdated", move |payload: String| {
            sink.lock().unwrap().push(payload);
        });

        board
            .dispatch(Command::UpdateNotes {
                text: "net play".into(),
            })
            .unwrap();

        // EventEmitter is async, give it time
        thread::sleep(Duration::from_millis(50));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let game: Match = serde_json::from_str(&seen[0]).unwrap();
        assert_eq!(game.current().notes, "net play");
    }

    #[test]
    fn state_changed_fires_for_every_command() {
        let mut board = Scoreboard::open(InMemoryKeyValueStore::new());
        let count = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&count);
        board.on(STATE_CHANGED, move |_payload: String| {
            *counter.lock().unwrap() += 1;
        });

        board.select_round(round(2));
        board.dispatch(Command::ShowStatistics).unwrap();
        board.dispatch(Command::Reset).unwrap();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(*count.lock().unwrap(), 3);
    }
}
