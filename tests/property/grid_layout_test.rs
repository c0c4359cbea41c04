//! Property-based tests for the grid packer.
//!
//! For any group set that fits, the packed boxes never overlap, all of them
//! lie inside the viewport, and packing again gives the same boxes.

use proptest::prelude::*;
use serde_json::json;
use sessionfiddle::services::grid_packer::{GridPacker, GridPackerTrait, PackConfig};
use sessionfiddle::types::session::{Bounds, GroupMap};
use sessionfiddle::types::settings::SortKey;

fn arb_config() -> impl Strategy<Value = PackConfig> {
    (
        200u32..2000,
        200u32..1500,
        20u32..300,
        20u32..200,
        0u32..40,
        0u32..40,
        prop_oneof![Just(SortKey::ByName), Just(SortKey::ById)],
    )
        .prop_map(
            |(vw, vh, box_width, box_height, v_spacing, h_spacing, sort_key)| PackConfig {
                viewport_width: f64::from(vw),
                viewport_height: f64::from(vh),
                box_width,
                box_height,
                v_spacing,
                h_spacing,
                sort_key,
            },
        )
}

fn arb_groups() -> impl Strategy<Value = GroupMap> {
    proptest::collection::btree_map(0u64..10_000, "[a-z ]{0,12}", 0..40).prop_map(|entries| {
        let mut map = GroupMap::new();
        for (id, title) in entries {
            map.insert(id.to_string(), json!({"id": id, "title": title}));
        }
        map
    })
}

fn all_bounds(map: &GroupMap) -> Vec<Bounds> {
    map.values()
        .map(|info| serde_json::from_value(info["bounds"].clone()).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn packed_boxes_do_not_overlap_and_fit(config in arb_config(), groups in arb_groups()) {
        let packer = GridPacker::new(config.clone());
        let mut map = groups.clone();

        match packer.pack(&mut map) {
            Ok(placed) => {
                prop_assert_eq!(placed, groups.len());
                let boxes = all_bounds(&map);
                for (i, a) in boxes.iter().enumerate() {
                    prop_assert!((a.left + a.width) as f64 <= config.viewport_width);
                    prop_assert!((a.top + a.height) as f64 <= config.viewport_height);
                    for b in &boxes[i + 1..] {
                        prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                    }
                }
            }
            Err(_) => {
                prop_assert_eq!(map, groups, "failed pack must leave groups untouched");
            }
        }
    }

    #[test]
    fn packing_is_idempotent(config in arb_config(), groups in arb_groups()) {
        let packer = GridPacker::new(config);
        let mut once = groups.clone();
        if packer.pack(&mut once).is_ok() {
            let mut twice = once.clone();
            packer.pack(&mut twice).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
