mod common;

use proptest::prelude::*;
use serde_json::{Map, Number, Value};

use common::Harness;
use docstore::domain::models::Document;

fn number_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        // Integers and decimals beyond what i64/u64/f64 can hold.
        "-?[1-9][0-9]{20,40}(\\.[0-9]{18,30})?"
            .prop_filter_map("number literal", |s| s.parse::<Number>().ok().map(Value::Number)),
    ]
}

fn data_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        number_strategy(),
        "\\PC{0,16}".prop_map(Value::String),
        "[\"\\\\/\n\r\t\u{1}\u{7f}]{1,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            // Keys arrive in generated order, not sorted.
            prop::collection::vec(("\\PC{1,6}", inner), 0..5).prop_map(|entries| {
                Value::Object(entries.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: a persisted document reads back unchanged from storage, tag
    /// order, duplicates, number precision and object key order included.
    #[test]
    fn prop_persist_then_get_returns_same_document(
        id in "[a-zA-Z0-9_-]{1,32}",
        tags in prop::collection::vec("\\PC{0,8}", 0..6),
        data in data_strategy(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let document = Document { id: id.clone(), tags, data };
        let fetched = runtime.block_on(async {
            let h = Harness::new().await;
            h.service.persist(document.clone()).await.unwrap();
            h.service.get_document(&id).await.unwrap()
        });

        let fetched = fetched.expect("persisted document is present");
        prop_assert_eq!(
            serde_json::to_string(&fetched).unwrap(),
            serde_json::to_string(&document).unwrap()
        );
        prop_assert_eq!(fetched, document);
    }
}
