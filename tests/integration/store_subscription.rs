//! End-to-end subscription flow: a view mounts a store, upstream producers
//! fill it field by field, and the view resets it when the dataset changes.

use std::collections::BTreeMap;
use std::sync::Arc;

use datascope::{
    DataType, DatasetInfo, DatasetInfoStore, Field, FieldPath, QueryState, Schema, StatsEntry,
    StatsResult,
};
use parking_lot::Mutex;

fn text_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("text".to_string(), Field::leaf(DataType::String));
    fields.insert("label".to_string(), Field::leaf(DataType::Int64));
    Schema::new(fields)
}

#[test]
fn test_load_then_reset_scenario() {
    let store = DatasetInfoStore::new();
    let seen: Arc<Mutex<Vec<DatasetInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |info| sink.lock().push(info.clone()));

    // Schema loader completes first.
    store.set_schema(text_schema());
    {
        let seen = seen.lock();
        let after_schema = seen.last().unwrap();
        assert_eq!(after_schema.schema.as_ref().unwrap(), &text_schema());
        assert!(after_schema.stats.is_none());
        assert!(after_schema.select_rows_schema.is_none());
    }

    // Stats arrive later, one entry still loading.
    store.set_stats(vec![
        StatsEntry::completed(
            FieldPath::parse("text"),
            StatsResult {
                total_count: 1000,
                approx_count_distinct: 997,
                avg_text_length: Some(120.5),
                ..StatsResult::default()
            },
        ),
        StatsEntry::loading(FieldPath::parse("label")),
    ]);
    {
        let seen = seen.lock();
        let after_stats = seen.last().unwrap();
        // Schema is untouched by the stats setter.
        assert_eq!(after_stats.schema.as_ref().unwrap(), &text_schema());
        let stats = after_stats.stats.as_ref().unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].stats.completed().unwrap().total_count, 1000);
        assert!(matches!(stats[1].stats, QueryState::Loading));
    }

    // Dataset switch: back to the initial record.
    store.reset();
    let seen = seen.lock();
    assert_eq!(seen.last().unwrap(), &DatasetInfo::default());
    // Immediate call plus three mutations.
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_late_subscriber_sees_current_state_immediately() {
    let store = DatasetInfoStore::new();
    store.set_schema(text_schema());

    let seen: Arc<Mutex<Vec<DatasetInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |info| sink.lock().push(info.clone()));

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].schema.as_ref().unwrap(), &text_schema());
}
