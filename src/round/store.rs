use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::score::{apply_delta, CounterKey, Direction};

use super::info::{MatchInfo, ROUND_OPTIONS};
use super::snapshot::{Round, Side, Slot, TeamSnapshot};

/// Hard ceiling on the length of a match.
pub const MAX_ROUNDS: usize = 99;

/// One tap on a counter control: which player, which counter, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterEdit {
    pub side: Side,
    pub slot: Slot,
    pub key: CounterKey,
    pub direction: Direction,
}

/// A match: the ordered rounds, the round cursor and whole-match metadata.
///
/// Rounds are 1-based. The sequence always holds at least one round and
/// the cursor always points inside it. Only [`Match::reset`] shrinks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MatchRecord")]
pub struct Match {
    rounds: Vec<Round>,
    current_round: NonZeroUsize,
    pub info: MatchInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchRecord {
    rounds: Vec<Round>,
    current_round: usize,
    info: MatchInfo,
}

impl From<MatchRecord> for Match {
    fn from(record: MatchRecord) -> Self {
        Match::from_parts(record.rounds, record.current_round, record.info)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// One zeroed round, cursor on round 1, empty metadata.
    pub fn new() -> Self {
        Self {
            rounds: vec![Round::zero()],
            current_round: NonZeroUsize::MIN,
            info: MatchInfo::default(),
        }
    }

    /// Rebuild a match from stored parts. An empty sequence becomes a single
    /// zero round, a zero cursor becomes 1, and a cursor a few rounds past the
    /// end gets zero rounds materialized up to its position. A cursor more than
    /// [`ROUND_OPTIONS`] past the end, or beyond [`MAX_ROUNDS`], is treated as
    /// corrupt and moved to the last stored round.
    pub fn from_parts(mut rounds: Vec<Round>, current_round: usize, info: MatchInfo) -> Self {
        if rounds.is_empty() {
            rounds.push(Round::zero());
        }
        let limit = (rounds.len() + ROUND_OPTIONS).min(MAX_ROUNDS).max(rounds.len());
        let current_round = if current_round > limit {
            log::warn!(
                "discarding round cursor {} for a {}-round match",
                current_round,
                rounds.len()
            );
            rounds.len()
        } else {
            current_round
        };
        let current_round = NonZeroUsize::new(current_round).unwrap_or(NonZeroUsize::MIN);
        if rounds.len() < current_round.get() {
            log::warn!(
                "round {} missing from a {}-round match; materializing zero rounds",
                current_round,
                rounds.len()
            );
            rounds.resize(current_round.get(), Round::zero());
        }
        Self {
            rounds,
            current_round,
            info,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round(&self) -> NonZeroUsize {
        self.current_round
    }

    /// The round under the cursor.
    pub fn current(&self) -> &Round {
        &self.rounds[self.current_index()]
    }

    /// Round by 1-based position.
    pub fn round(&self, number: usize) -> Option<&Round> {
        number.checked_sub(1).and_then(|i| self.rounds.get(i))
    }

    fn current_index(&self) -> usize {
        self.current_round.get() - 1
    }

    /// Move the cursor to `target`, appending zeroed rounds when it lies past
    /// the end. New rounds take their rosters from the last round in the
    /// sequence, whichever round the cursor was on before. The match never
    /// grows past [`MAX_ROUNDS`]; a larger target lands on the last round.
    pub fn select_round(&mut self, target: NonZeroUsize) {
        let ceiling = MAX_ROUNDS.max(self.rounds.len());
        let target = if target.get() > ceiling {
            log::warn!("round {} is past the {}-round limit", target, ceiling);
            NonZeroUsize::new(ceiling).unwrap_or(NonZeroUsize::MIN)
        } else {
            target
        };
        let target_len = target.get();
        if target_len > self.rounds.len() {
            log::debug!(
                "extending match from {} to {} rounds",
                self.rounds.len(),
                target_len
            );
            let template = self.rounds.last().cloned().unwrap_or_default();
            let fresh = Round::following(&template);
            self.rounds.resize(target_len, fresh);
        }
        self.current_round = target;
    }

    /// Store `snapshot` verbatim for `side` in the current round and copy
    /// only its roster names into every other round.
    pub fn update_team_snapshot(&mut self, side: Side, snapshot: TeamSnapshot) {
        let current = self.current_index();
        for (index, round) in self.rounds.iter_mut().enumerate() {
            if index != current {
                round.team_mut(side).adopt_names(&snapshot);
            }
        }
        *self.rounds[current].team_mut(side) = snapshot;
    }

    pub fn update_notes(&mut self, text: impl Into<String>) {
        let current = self.current_index();
        self.rounds[current].notes = text.into();
    }

    /// Back to the initial one-round state with cleared metadata.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply one counter tap to the current round.
    pub fn apply_counter_edit(&mut self, edit: CounterEdit) {
        let mut snapshot = self.current().team(edit.side).clone();
        let sheet = snapshot.scores.get_mut(edit.slot);
        *sheet = apply_delta(sheet, edit.key, edit.direction);
        self.update_team_snapshot(edit.side, snapshot);
    }

    /// Rename a roster slot. The name reaches every round for that side.
    pub fn rename_player(&mut self, side: Side, slot: Slot, name: impl Into<String>) {
        let mut snapshot = self.current().team(side).clone();
        snapshot.set_name(slot, name);
        self.update_team_snapshot(side, snapshot);
    }
}
