//! Datascope: Observable Dataset Metadata State
//!
//! Client-side state layer for a dataset exploration front end: a store
//! holding the latest known schema, field statistics, and row-selection
//! schema for one dataset view, with synchronous change notification and
//! explicit per-view scoping.

pub mod config;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod path;
pub mod schema;
pub mod scope;
pub mod select_rows;
pub mod stats;
pub mod store;

pub use path::FieldPath;
pub use schema::{DataType, Field, Schema};
pub use scope::{publish, retrieve, ViewScope, DATASET_INFO_CONTEXT};
pub use select_rows::{SelectRowsSchemaResult, SortOrder, SortResult};
pub use stats::{QueryState, StatsEntry, StatsResult};
pub use store::{DatasetInfo, DatasetInfoStore, InfoReader, Subscription};
