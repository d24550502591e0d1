//! Row-Selection Schemas
//!
//! The shape of a row-selection query result, as resolved by the query
//! layer: the schema of the returned rows plus the sorts and UDF columns
//! that produced it.

use crate::path::FieldPath;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One resolved sort applied to the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortResult {
    pub path: FieldPath,
    pub order: SortOrder,

    /// Output column alias, when the sort targets a UDF column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A UDF column included in the selection output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRowsUdf {
    pub path: FieldPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Shape of a row-selection query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectRowsSchemaResult {
    pub data_schema: Schema,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub udfs: Vec<SelectRowsUdf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<SortResult>,
}
