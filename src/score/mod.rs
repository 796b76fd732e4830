//! Per-player score sheets and the single-counter edit rule.
//!
//! A sheet holds five success/fail rally categories and four serve counts.
//! Counters are addressed with [`CounterKey`], which pairs a bucket only with
//! the categories that have one.

mod engine;
mod sheet;

pub use engine::{apply_delta, Direction};
pub use sheet::{
    BinaryCategory, BinaryCounter, Bucket, CounterKey, PlayerScoreSheet, ScalarMetric,
};
