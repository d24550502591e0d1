//! Field Statistics
//!
//! Statistics are computed by an external query layer, one leaf at a time,
//! and may still be in flight when they reach the store. [`QueryState`]
//! carries that lifecycle; the store itself never interprets it.

use crate::path::FieldPath;
use serde::{Deserialize, Serialize};

/// Lifecycle of an externally computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum QueryState<T> {
    /// The query was issued and has not completed.
    Loading,
    /// The query failed; the message comes from the query layer.
    Error(String),
    Completed(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn completed(&self) -> Option<&T> {
        match self {
            QueryState::Completed(value) => Some(value),
            _ => None,
        }
    }
}

/// Summary statistics for one leaf field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// Count of non-null values.
    pub total_count: u64,

    /// Approximate distinct count, scaled up when computed over a sample.
    pub approx_count_distinct: u64,

    /// Average length, string leaves only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_text_length: Option<f64>,

    /// Minimum value, ordinal leaves only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_val: Option<serde_json::Value>,

    /// Maximum value, ordinal leaves only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_val: Option<serde_json::Value>,
}

/// One element of the store's `stats` sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEntry {
    pub path: FieldPath,
    pub stats: QueryState<StatsResult>,
}

impl StatsEntry {
    pub fn loading(path: FieldPath) -> Self {
        StatsEntry {
            path,
            stats: QueryState::Loading,
        }
    }

    pub fn completed(path: FieldPath, stats: StatsResult) -> Self {
        StatsEntry {
            path,
            stats: QueryState::Completed(stats),
        }
    }
}
