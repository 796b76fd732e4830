use serde::{Deserialize, Serialize};

/// Rally categories that are tallied as a success/fail pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryCategory {
    Attack,
    Defense,
    Midfield,
    Chance,
    Smash,
}

impl BinaryCategory {
    pub const ALL: [BinaryCategory; 5] = [
        BinaryCategory::Attack,
        BinaryCategory::Defense,
        BinaryCategory::Midfield,
        BinaryCategory::Chance,
        BinaryCategory::Smash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryCategory::Attack => "attack",
            BinaryCategory::Defense => "defense",
            BinaryCategory::Midfield => "midfield",
            BinaryCategory::Chance => "chance",
            BinaryCategory::Smash => "smash",
        }
    }
}

/// Serve-related metrics kept as a single count.
///
/// The `*Rate` names are historical: per round they hold raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarMetric {
    FirstServeRate,
    ReceiveErrorRate,
    ServePoints,
    DoubleFaults,
}

impl ScalarMetric {
    pub const ALL: [ScalarMetric; 4] = [
        ScalarMetric::FirstServeRate,
        ScalarMetric::ReceiveErrorRate,
        ScalarMetric::ServePoints,
        ScalarMetric::DoubleFaults,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarMetric::FirstServeRate => "firstServeRate",
            ScalarMetric::ReceiveErrorRate => "receiveErrorRate",
            ScalarMetric::ServePoints => "servePoints",
            ScalarMetric::DoubleFaults => "doubleFaults",
        }
    }
}

/// Which half of a [`BinaryCounter`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    Success,
    Fail,
}

/// Address of exactly one counter on a [`PlayerScoreSheet`].
///
/// A scalar metric carries no bucket, so a bucket can never be paired with
/// a metric that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterKey {
    Binary(BinaryCategory, Bucket),
    Scalar(ScalarMetric),
}

impl CounterKey {
    pub fn success(category: BinaryCategory) -> Self {
        CounterKey::Binary(category, Bucket::Success)
    }

    pub fn fail(category: BinaryCategory) -> Self {
        CounterKey::Binary(category, Bucket::Fail)
    }
}

impl From<ScalarMetric> for CounterKey {
    fn from(metric: ScalarMetric) -> Self {
        CounterKey::Scalar(metric)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryCounter {
    pub success: u32,
    pub fail: u32,
}

impl BinaryCounter {
    pub fn new(success: u32, fail: u32) -> Self {
        Self { success, fail }
    }

    pub fn get(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Success => self.success,
            Bucket::Fail => self.fail,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut u32 {
        match bucket {
            Bucket::Success => &mut self.success,
            Bucket::Fail => &mut self.fail,
        }
    }

    pub fn total(&self) -> u32 {
        self.success.saturating_add(self.fail)
    }

    pub fn merge(&mut self, other: &BinaryCounter) {
        self.success = self.success.saturating_add(other.success);
        self.fail = self.fail.saturating_add(other.fail);
    }
}

/// One player's counters for one round (or, once aggregated, for a match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreSheet {
    pub attack: BinaryCounter,
    pub defense: BinaryCounter,
    pub midfield: BinaryCounter,
    pub chance: BinaryCounter,
    pub smash: BinaryCounter,
    pub first_serve_rate: u32,
    pub receive_error_rate: u32,
    pub serve_points: u32,
    pub double_faults: u32,
}

impl PlayerScoreSheet {
    /// A fresh sheet with every counter at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn binary(&self, category: BinaryCategory) -> &BinaryCounter {
        match category {
            BinaryCategory::Attack => &self.attack,
            BinaryCategory::Defense => &self.defense,
            BinaryCategory::Midfield => &self.midfield,
            BinaryCategory::Chance => &self.chance,
            BinaryCategory::Smash => &self.smash,
        }
    }

    pub fn binary_mut(&mut self, category: BinaryCategory) -> &mut BinaryCounter {
        match category {
            BinaryCategory::Attack => &mut self.attack,
            BinaryCategory::Defense => &mut self.defense,
            BinaryCategory::Midfield => &mut self.midfield,
            BinaryCategory::Chance => &mut self.chance,
            BinaryCategory::Smash => &mut self.smash,
        }
    }

    pub fn scalar(&self, metric: ScalarMetric) -> u32 {
        match metric {
            ScalarMetric::FirstServeRate => self.first_serve_rate,
            ScalarMetric::ReceiveErrorRate => self.receive_error_rate,
            ScalarMetric::ServePoints => self.serve_points,
            ScalarMetric::DoubleFaults => self.double_faults,
        }
    }

    pub fn scalar_mut(&mut self, metric: ScalarMetric) -> &mut u32 {
        match metric {
            ScalarMetric::FirstServeRate => &mut self.first_serve_rate,
            ScalarMetric::ReceiveErrorRate => &mut self.receive_error_rate,
            ScalarMetric::ServePoints => &mut self.serve_points,
            ScalarMetric::DoubleFaults => &mut self.double_faults,
        }
    }

    /// Read the counter addressed by `key`.
    pub fn get(&self, key: CounterKey) -> u32 {
        match key {
            CounterKey::Binary(category, bucket) => self.binary(category).get(bucket),
            CounterKey::Scalar(metric) => self.scalar(metric),
        }
    }

    pub(crate) fn counter_mut(&mut self, key: CounterKey) -> &mut u32 {
        match key {
            CounterKey::Binary(category, bucket) => self.binary_mut(category).get_mut(bucket),
            CounterKey::Scalar(metric) => self.scalar_mut(metric),
        }
    }

    /// Field-wise sum of `other` into `self`.
    pub fn merge(&mut self, other: &PlayerScoreSheet) {
        for category in BinaryCategory::ALL {
            self.binary_mut(category).merge(other.binary(category));
        }
        for metric in ScalarMetric::ALL {
            let value = self.scalar_mut(metric);
            *value = value.saturating_add(other.scalar(metric));
        }
    }

    /// Success and fail summed over the five rally categories only.
    pub fn binary_totals(&self) -> BinaryCounter {
        let mut totals = BinaryCounter::default();
        for category in BinaryCategory::ALL {
            totals.merge(self.binary(category));
        }
        totals
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
