//! Dataset Schemas
//!
//! Structured description of a dataset's fields and their types. A field is
//! either a scalar leaf with a [`DataType`], a repeated (list) field, or a
//! nested struct. Field order within a struct is deterministic.

use crate::path::{FieldPath, PATH_WILDCARD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar type of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Int64,
    Float64,
    Boolean,
    Timestamp,
    Embedding,
    Binary,
    Null,
}

impl DataType {
    /// Whether values of this type admit a total order (min/max statistics).
    pub fn is_ordinal(self) -> bool {
        matches!(
            self,
            DataType::Int64 | DataType::Float64 | DataType::Timestamp
        )
    }
}

/// One field in a schema: exactly one of `dtype`, `repeated_field`, or
/// `fields` is expected to be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Leaf type, if this is a scalar field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<DataType>,

    /// Element field, if this is a repeated (list) field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeated_field: Option<Box<Field>>,

    /// Child fields, if this is a struct field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Field>>,
}

impl Field {
    pub fn leaf(dtype: DataType) -> Self {
        Field {
            dtype: Some(dtype),
            ..Field::default()
        }
    }

    pub fn repeated(element: Field) -> Self {
        Field {
            repeated_field: Some(Box::new(element)),
            ..Field::default()
        }
    }

    pub fn structure(fields: BTreeMap<String, Field>) -> Self {
        Field {
            fields: Some(fields),
            ..Field::default()
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.dtype.is_some()
    }
}

/// Description of a dataset's fields and types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: BTreeMap<String, Field>,
}

impl Schema {
    pub fn new(fields: BTreeMap<String, Field>) -> Self {
        Schema { fields }
    }

    /// Look up the field at `path`, descending through structs and repeated
    /// fields (`*` selects the element of a repeated field).
    pub fn field(&self, path: &FieldPath) -> Option<&Field> {
        let mut parts = path.parts().iter();
        let first = parts.next()?;
        let mut current = self.fields.get(first)?;
        for part in parts {
            current = if part == PATH_WILDCARD {
                current.repeated_field.as_deref()?
            } else {
                current.fields.as_ref()?.get(part)?
            };
        }
        Some(current)
    }

    /// All leaf paths with their fields, in deterministic (sorted) order.
    pub fn leafs(&self) -> Vec<(FieldPath, &Field)> {
        let mut out = Vec::new();
        for (name, field) in &self.fields {
            collect_leafs(&FieldPath::default().child(name.clone()), field, &mut out);
        }
        out
    }
}

fn collect_leafs<'a>(path: &FieldPath, field: &'a Field, out: &mut Vec<(FieldPath, &'a Field)>) {
    if field.is_leaf() {
        out.push((path.clone(), field));
        return;
    }
    if let Some(element) = &field.repeated_field {
        collect_leafs(&path.child(PATH_WILDCARD), element, out);
    }
    if let Some(children) = &field.fields {
        for (name, child) in children {
            collect_leafs(&path.child(name.clone()), child, out);
        }
    }
}
