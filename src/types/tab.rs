use serde::{Deserialize, Serialize};

/// URL used for a tab that has no navigation history.
pub const BLANK_URL: &str = "about:blank";

/// Title used when a tab's first entry carries none.
pub const UNTITLED: &str = "(untitled)";

/// A tab reduced to what a uzbl session line needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabRecord {
    pub url: String,
    pub title: String,
}

impl TabRecord {
    pub fn blank() -> Self {
        Self {
            url: BLANK_URL.to_string(),
            title: UNTITLED.to_string(),
        }
    }
}
