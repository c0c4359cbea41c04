use serde::{Deserialize, Serialize};

/// Group metadata of one window, as decoded from the `tabview-group` field.
///
/// Kept as a raw JSON map so fields this crate does not know about survive
/// a rewrite untouched.
pub type GroupMap = serde_json::Map<String, serde_json::Value>;

/// One tab group as listed from the group metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Key of the entry in the metadata map.
    pub key: String,
    /// Numeric id, matched against each tab's `groupID`.
    pub id: u64,
    pub title: String,
}

/// Bounding box of a group in the tab-groups UI, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub top: u64,
    pub left: u64,
    pub width: u64,
    pub height: u64,
}

impl Bounds {
    /// True when the two boxes share any interior area.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.left + other.width
            && other.left < self.left + self.width
            && self.top < other.top + other.height
            && other.top < self.top + self.height
    }
}

/// Pixel size of the tab-groups UI canvas (`tabview-ui.pageBounds`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}
