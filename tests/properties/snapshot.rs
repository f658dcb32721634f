//! Property tests for snapshot parsing.

use proptest::prelude::*;

use fluxtree::domain::ports::StatusSourceError;
use fluxtree::infrastructure::status::parse_snapshot;

/// Entries that do not fit the status record shape.
fn bad_entry() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::json!({ "foo": 1 })),
        Just(serde_json::json!({ "name": "bad", "ready": 1 })),
        Just(serde_json::json!({ "name": 7 })),
        Just(serde_json::json!("loose text")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary input never panics the parser.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        let _ = parse_snapshot(&content);
    }

    /// PROPERTY: Comma-joined dependency strings are split, trimmed, and
    /// stripped of empty entries.
    #[test]
    fn property_dependencies_are_trimmed(
        deps in proptest::collection::vec("[a-z][a-z0-9-]{0,8}", 0..5),
        pad in " {0,2}",
    ) {
        let joined = deps
            .iter()
            .map(|d| format!("{pad}{d}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        let json = serde_json::json!([{ "name": "x", "ready": "True", "dependencies": joined }]);
        let records = parse_snapshot(&json.to_string()).unwrap();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].dependency_names(), deps);
    }

    /// PROPERTY: A record list parses to exactly as many records as it
    /// holds, or fails as malformed. Entries are never silently dropped.
    #[test]
    fn property_records_are_all_or_nothing(
        names in proptest::collection::vec("[a-z][a-z0-9-]{0,8}", 1..8),
        corrupt in proptest::option::of((any::<prop::sample::Index>(), bad_entry())),
        yaml in any::<bool>(),
    ) {
        let mut entries: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({ "name": n, "ready": "True" }))
            .collect();
        if let Some((at, bad)) = &corrupt {
            let i = at.index(entries.len());
            entries[i] = bad.clone();
        }
        let doc = serde_json::Value::Array(entries);
        let content = if yaml {
            serde_yaml_ng::to_string(&doc).unwrap()
        } else {
            doc.to_string()
        };

        match parse_snapshot(&content) {
            Ok(records) => {
                prop_assert!(corrupt.is_none(), "corrupt entry accepted: {}", content);
                prop_assert_eq!(records.len(), names.len());
            }
            Err(err) => {
                prop_assert!(corrupt.is_some(), "clean snapshot rejected: {}", err);
                prop_assert!(matches!(err, StatusSourceError::Malformed { .. }), "expected Malformed error, got: {}", err);
            }
        }
    }
}
