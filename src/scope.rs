//! View Scopes
//!
//! Explicit replacement for a UI framework's ambient context: the owning
//! view constructs a [`ViewScope`] tree mirroring the view hierarchy and
//! passes child scopes down through constructors. A value published in a
//! scope is visible to that scope and its descendants; lookup walks toward
//! the root and the nearest publisher wins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::store::{DatasetInfoStore, InfoReader};

/// Fixed name under which a view publishes its dataset info store.
pub const DATASET_INFO_CONTEXT: &str = "DATASET_INFO_CONTEXT";

/// One level of the view hierarchy.
pub struct ViewScope {
    parent: Option<Arc<ViewScope>>,
    values: RwLock<HashMap<String, InfoReader>>,
}

impl ViewScope {
    /// Root scope of a view hierarchy.
    pub fn root() -> Arc<Self> {
        Arc::new(ViewScope {
            parent: None,
            values: RwLock::new(HashMap::new()),
        })
    }

    /// Child scope for a nested view. Values published here shadow the
    /// parent's for this subtree only.
    pub fn child(self: &Arc<Self>) -> Arc<Self> {
        Arc::new(ViewScope {
            parent: Some(Arc::clone(self)),
            values: RwLock::new(HashMap::new()),
        })
    }

    /// Register `reader` under `name` in this scope, replacing any previous
    /// registration at this level.
    pub fn publish_named(&self, name: impl Into<String>, reader: InfoReader) {
        let name = name.into();
        debug!(name = %name, "published in view scope");
        self.values.write().insert(name, reader);
    }

    /// Nearest registration for `name`, walking from this scope to the root.
    /// `None` when no ancestor (including this scope) published one; that is
    /// an expected outcome, not an error.
    pub fn retrieve_named(&self, name: &str) -> Option<InfoReader> {
        if let Some(reader) = self.values.read().get(name) {
            return Some(reader.clone());
        }
        self.parent.as_ref()?.retrieve_named(name)
    }
}

/// Publish `store`'s read-only handle under [`DATASET_INFO_CONTEXT`].
pub fn publish(scope: &ViewScope, store: &DatasetInfoStore) {
    scope.publish_named(DATASET_INFO_CONTEXT, store.reader());
}

/// The nearest published dataset info handle, if any.
pub fn retrieve(scope: &ViewScope) -> Option<InfoReader> {
    scope.retrieve_named(DATASET_INFO_CONTEXT)
}
