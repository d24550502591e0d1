//! Dataset Info Store
//!
//! An observable holder of the latest known schema, field statistics, and
//! row-selection schema for one dataset view. Created when the view mounts
//! with all fields absent, mutated field-by-field as asynchronous
//! computations complete elsewhere, and reset wholesale when the underlying
//! dataset changes.
//!
//! The store's identity (its subscription channel) is stable for the
//! lifetime of the owning view; mutations replace contents only. Every
//! mutation notifies all subscribers synchronously with the full updated
//! record. Callbacks run outside the store's locks, so a subscriber may
//! read the store or drop its own subscription from within its callback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::debug;

use crate::schema::Schema;
use crate::select_rows::SelectRowsSchemaResult;
use crate::stats::StatsEntry;

/// The held record. All three fields are independently nullable; none
/// implies another is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub schema: Option<Schema>,
    pub stats: Option<Vec<StatsEntry>>,
    pub select_rows_schema: Option<SelectRowsSchemaResult>,
}

type Callback = Arc<dyn Fn(&DatasetInfo) + Send + Sync>;

struct Inner {
    current: RwLock<DatasetInfo>,
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_id: AtomicU64,
}

impl Inner {
    fn notify(&self) {
        let snapshot = self.current.read().clone();
        // Clone the callback list so callbacks run without the lock held.
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.lock().retain(|(sub_id, _)| *sub_id != id);
    }
}

/// Observable holder for one dataset view's metadata.
///
/// Cloning shares the same store (same contents, same subscribers).
#[derive(Clone)]
pub struct DatasetInfoStore {
    inner: Arc<Inner>,
}

impl Default for DatasetInfoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetInfoStore {
    /// New store with all fields absent.
    pub fn new() -> Self {
        DatasetInfoStore {
            inner: Arc::new(Inner {
                current: RwLock::new(DatasetInfo::default()),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current record.
    pub fn get(&self) -> DatasetInfo {
        self.inner.current.read().clone()
    }

    /// Register `on_change`, invoking it immediately with the current record
    /// and again after every mutation. Dropping the returned [`Subscription`]
    /// removes this subscriber without affecting others.
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(&DatasetInfo) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(on_change);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::clone(&callback)));
        callback(&self.get());
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Replace the schema field; other fields are untouched.
    pub fn set_schema(&self, schema: Schema) {
        debug!(fields = schema.fields.len(), "dataset schema updated");
        self.inner.current.write().schema = Some(schema);
        self.inner.notify();
    }

    /// Replace the stats sequence; other fields are untouched.
    pub fn set_stats(&self, stats: Vec<StatsEntry>) {
        debug!(entries = stats.len(), "dataset stats updated");
        self.inner.current.write().stats = Some(stats);
        self.inner.notify();
    }

    /// Replace the row-selection schema; other fields are untouched.
    pub fn set_select_rows_schema(&self, schema: SelectRowsSchemaResult) {
        debug!("select-rows schema updated");
        self.inner.current.write().select_rows_schema = Some(schema);
        self.inner.notify();
    }

    /// Replace the whole record with the initial all-absent state.
    pub fn reset(&self) {
        debug!("dataset info reset");
        *self.inner.current.write() = DatasetInfo::default();
        self.inner.notify();
    }

    /// Read-only observable handle for descendant views.
    pub fn reader(&self) -> InfoReader {
        InfoReader {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Whether two handles refer to the same store.
    pub fn ptr_eq(&self, other: &DatasetInfoStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for DatasetInfoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetInfoStore")
            .field("current", &*self.inner.current.read())
            .field("subscribers", &self.inner.subscribers.lock().len())
            .finish()
    }
}

/// Read-only view of a [`DatasetInfoStore`]: descendant views can observe
/// but never mutate or reset.
#[derive(Clone)]
pub struct InfoReader {
    inner: Arc<Inner>,
}

impl InfoReader {
    pub fn get(&self) -> DatasetInfo {
        self.inner.current.read().clone()
    }

    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(&DatasetInfo) + Send + Sync + 'static,
    {
        DatasetInfoStore {
            inner: Arc::clone(&self.inner),
        }
        .subscribe(on_change)
    }

    /// Whether this reader observes `store`.
    pub fn reads(&self, store: &DatasetInfoStore) -> bool {
        Arc::ptr_eq(&self.inner, &store.inner)
    }

    pub fn ptr_eq(&self, other: &InfoReader) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for InfoReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoReader")
            .field("current", &*self.inner.current.read())
            .finish()
    }
}

/// Handle for one registered subscriber. Dropping it unsubscribes; the
/// store itself is kept alive by its owner, not by subscriptions.
pub struct Subscription {
    inner: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Explicitly remove this subscriber. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}
