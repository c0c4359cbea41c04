use serde::{Deserialize, Serialize};

/// Order in which groups are laid out or listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by group title.
    ByName,
    /// Ascending numeric group id.
    #[default]
    ById,
}

/// Box and spacing parameters for the grid layout.
///
/// Missing fields in a settings file fall back to these defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridSettings {
    pub box_width: u32,
    pub box_height: u32,
    pub v_spacing: u32,
    pub h_spacing: u32,
    pub sort_key: SortKey,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            box_width: 140,
            box_height: 110,
            v_spacing: 15,
            h_spacing: 15,
            sort_key: SortKey::ById,
        }
    }
}
