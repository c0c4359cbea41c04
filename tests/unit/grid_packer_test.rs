//! Unit tests for the grid packer, including the reference layouts.

use serde_json::json;
use sessionfiddle::services::grid_packer::{GridPacker, GridPackerTrait, PackConfig};
use sessionfiddle::types::errors::{ConvertError, LayoutError};
use sessionfiddle::types::session::{Bounds, GroupMap, Viewport};
use sessionfiddle::types::settings::{GridSettings, SortKey};

fn config(width: f64, height: f64, sort_key: SortKey) -> PackConfig {
    let settings = GridSettings {
        sort_key,
        ..GridSettings::default()
    };
    PackConfig::new(&settings, Viewport { width, height })
}

fn groups(entries: &[(u64, &str)]) -> GroupMap {
    let mut map = GroupMap::new();
    for (id, title) in entries {
        map.insert(
            id.to_string(),
            json!({"id": id, "title": title, "bounds": {"top": 1, "left": 1, "width": 9, "height": 9}}),
        );
    }
    map
}

fn bounds_of(map: &GroupMap, key: &str) -> Bounds {
    serde_json::from_value(map[key]["bounds"].clone()).unwrap()
}

#[test]
fn test_three_groups_overflow_small_viewport() {
    let packer = GridPacker::new(config(300.0, 300.0, SortKey::ById));
    let mut map = groups(&[(1, "a"), (2, "b"), (3, "c")]);
    let untouched = map.clone();

    let err = packer.pack(&mut map).unwrap_err();
    match err {
        ConvertError::Layout(LayoutError::Overflow {
            columns,
            height_needed,
            groups,
            ..
        }) => {
            assert_eq!(columns, 1);
            assert_eq!(height_needed, 500);
            assert_eq!(groups, 3);
        }
        other => panic!("expected overflow, got {:?}", other),
    }
    assert_eq!(map, untouched, "a failed pack must not write any bounds");
}

#[test]
fn test_sort_by_name_places_groups_in_first_row() {
    let packer = GridPacker::new(config(640.0, 480.0, SortKey::ByName));
    let mut map = groups(&[(1, "b"), (2, "a"), (3, "c")]);

    assert_eq!(packer.pack(&mut map).unwrap(), 3);

    let expect = |top, left| Bounds {
        top,
        left,
        width: 140,
        height: 110,
    };
    assert_eq!(bounds_of(&map, "2"), expect(15, 15));
    assert_eq!(bounds_of(&map, "1"), expect(15, 170));
    assert_eq!(bounds_of(&map, "3"), expect(15, 325));
}

#[test]
fn test_sort_by_id_wraps_rows() {
    let packer = GridPacker::new(config(640.0, 480.0, SortKey::ById));
    let mut map = groups(&[(50, "x"), (7, "y"), (12, "z"), (3, "w"), (31, "v")]);

    packer.pack(&mut map).unwrap();

    assert_eq!(bounds_of(&map, "3").left, 15);
    assert_eq!(bounds_of(&map, "7").left, 170);
    assert_eq!(bounds_of(&map, "12").left, 325);
    assert_eq!(bounds_of(&map, "31").left, 480);
    let wrapped = bounds_of(&map, "50");
    assert_eq!((wrapped.top, wrapped.left), (140, 15));
}

#[test]
fn test_pack_keeps_other_group_fields() {
    let packer = GridPacker::new(config(640.0, 480.0, SortKey::ById));
    let mut map = GroupMap::new();
    map.insert(
        "4".to_string(),
        json!({"id": 4, "title": "keep", "userSize": {"x": 1, "y": 2}, "locked": {}}),
    );

    packer.pack(&mut map).unwrap();

    assert_eq!(map["4"]["userSize"], json!({"x": 1, "y": 2}));
    assert_eq!(map["4"]["locked"], json!({}));
    assert_eq!(map["4"]["title"], "keep");
}

#[test]
fn test_pack_without_groups_places_nothing() {
    let packer = GridPacker::new(config(640.0, 480.0, SortKey::ById));
    let mut map = GroupMap::new();
    assert_eq!(packer.pack(&mut map).unwrap(), 0);
}

#[test]
fn test_box_wider_than_viewport_is_guarded() {
    let packer = GridPacker::new(config(100.0, 480.0, SortKey::ById));
    let mut map = groups(&[(1, "a")]);
    assert!(matches!(
        packer.pack(&mut map),
        Err(ConvertError::Layout(LayoutError::NoColumns { .. }))
    ));
}

#[test]
fn test_full_last_row_still_needs_spare_row() {
    // 4 columns, 3 rows of height 125 = 375; 8 groups need 8/4 + 1 = 3 rows.
    let cfg = config(640.0, 375.0, SortKey::ById);
    assert_eq!(cfg.check_capacity(8).unwrap(), 4);
    assert!(cfg.check_capacity(12).is_err());
}

#[test]
fn test_plan_does_not_need_metadata() {
    let packer = GridPacker::new(config(640.0, 480.0, SortKey::ByName));
    let summaries = sessionfiddle::services::group_extractor::list_groups(&groups(&[
        (1, "zeta"),
        (2, "alpha"),
    ]))
    .unwrap();
    let plan = packer.plan(&summaries).unwrap();
    let titles: Vec<&str> = plan.iter().map(|(g, _)| g.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "zeta"]);
}
