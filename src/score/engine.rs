use serde::{Deserialize, Serialize};

use super::sheet::{CounterKey, PlayerScoreSheet};

/// Direction of a single tap on a counter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Direction::Increment => Direction::Decrement,
            Direction::Decrement => Direction::Increment,
        }
    }

    fn apply(self, value: u32) -> u32 {
        match self {
            Direction::Increment => value.saturating_add(1),
            Direction::Decrement => value.saturating_sub(1),
        }
    }
}

/// Returns a copy of `sheet` with the counter at `key` moved one step in
/// `direction`. Counters floor at zero; every other field is left as is.
pub fn apply_delta(
    sheet: &PlayerScoreSheet,
    key: CounterKey,
    direction: Direction,
) -> PlayerScoreSheet {
    let mut next = sheet.clone();
    let counter = next.counter_mut(key);
    *counter = direction.apply(*counter);
    next
}
