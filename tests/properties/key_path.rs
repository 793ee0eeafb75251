//! Property tests for required-key detection.

use proptest::prelude::*;
use serde_json::{json, Value};

use branding_check::application::check::check_required_keys;
use branding_check::domain::requirements::REQUIRED_JSON_PATHS;
use branding_check::domain::resolve;

fn full_document() -> Value {
    let mut doc = json!({});
    for path in REQUIRED_JSON_PATHS {
        let (section, key) = path.split_once('.').unwrap();
        if doc.get(section).is_none() {
            doc[section] = json!({});
        }
        doc[section][key] = json!("value");
    }
    doc
}

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z.]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Removing any subset of required keys reports exactly those
    /// keys as missing, in table order.
    #[test]
    fn property_missing_keys_are_named(
        mask in prop::collection::vec(any::<bool>(), REQUIRED_JSON_PATHS.len())
    ) {
        let mut doc = full_document();
        let mut expected = Vec::new();
        for (path, drop) in REQUIRED_JSON_PATHS.iter().zip(&mask) {
            if *drop {
                let (section, key) = path.split_once('.').unwrap();
                doc[section].as_object_mut().unwrap().remove(key);
                expected.push(format!("Missing key: {}", path));
            }
        }

        prop_assert_eq!(check_required_keys(&doc), expected);
    }

    /// PROPERTY: Lookup and key checks never panic on arbitrary JSON.
    #[test]
    fn property_arbitrary_json_never_panics(
        doc in arbitrary_json(),
        path in "[a-zA-Z]{1,4}(\\.[a-zA-Z]{1,4}){0,3}",
    ) {
        let _ = resolve(&doc, &path);
        let issues = check_required_keys(&doc);
        prop_assert!(issues.len() <= REQUIRED_JSON_PATHS.len());
    }
}
