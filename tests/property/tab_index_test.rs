//! Property-based tests for the tabs-by-group index.

use proptest::prelude::*;
use serde_json::{json, Value};
use sessionfiddle::managers::tab_grouper::build_tab_index;
use sessionfiddle::types::tab::TabRecord;

/// (group id, optional first entry (url, optional title))
type TabSpec = (u64, Option<(String, Option<String>)>);

fn arb_tabs() -> impl Strategy<Value = Vec<TabSpec>> {
    proptest::collection::vec(
        (
            0u64..6,
            proptest::option::of((
                "https://[a-z]{3,10}\\.example/[a-z0-9]{0,8}",
                proptest::option::of("[A-Za-z0-9 ]{0,20}"),
            )),
        ),
        0..50,
    )
}

fn to_window(tabs: &[TabSpec]) -> Value {
    let tabs: Vec<Value> = tabs
        .iter()
        .map(|(group_id, entry)| {
            let entries = match entry {
                None => json!([]),
                Some((url, None)) => json!([{"url": url}]),
                Some((url, Some(title))) => json!([{"url": url, "title": title}]),
            };
            json!({
                "entries": entries,
                "extData": {"tabview-tab": json!({"groupID": group_id}).to_string()}
            })
        })
        .collect();
    json!({ "tabs": tabs })
}

fn expected_record(entry: &Option<(String, Option<String>)>) -> TabRecord {
    match entry {
        None => TabRecord::blank(),
        Some((url, title)) => TabRecord {
            url: url.clone(),
            title: title.clone().unwrap_or_else(|| "(untitled)".to_string()),
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn buckets_partition_tabs_in_order(tabs in arb_tabs()) {
        let index = build_tab_index(&to_window(&tabs)).unwrap();

        prop_assert_eq!(index.tab_count(), tabs.len());
        let distinct: std::collections::HashSet<u64> = tabs.iter().map(|(g, _)| *g).collect();
        prop_assert_eq!(index.group_count(), distinct.len());

        for group_id in distinct {
            let expected: Vec<TabRecord> = tabs
                .iter()
                .filter(|(g, _)| *g == group_id)
                .map(|(_, entry)| expected_record(entry))
                .collect();
            prop_assert_eq!(index.get(group_id).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn empty_entries_are_blank(group_id in 0u64..1000) {
        let index = build_tab_index(&to_window(&[(group_id, None)])).unwrap();
        prop_assert_eq!(
            index.get(group_id).unwrap(),
            &[TabRecord {
                url: "about:blank".to_string(),
                title: "(untitled)".to_string(),
            }][..]
        );
    }
}
