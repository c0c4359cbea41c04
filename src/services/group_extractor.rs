//! Flattens the `tabview-group` map into a list of group summaries.

use serde_json::Value;

use crate::types::errors::SessionError;
use crate::types::session::{GroupMap, GroupSummary};
use crate::types::settings::SortKey;

/// Lists every group in map iteration order.
///
/// Each entry must carry a numeric `id` and a string `title`, and its map key
/// must be the decimal form of that id. Tabs refer to groups by id while the
/// map is keyed by string, so a mismatch would silently orphan tabs.
pub fn list_groups(groups: &GroupMap) -> Result<Vec<GroupSummary>, SessionError> {
    groups
        .iter()
        .map(|(key, info)| summarize(key, info))
        .collect()
}

fn summarize(key: &str, info: &Value) -> Result<GroupSummary, SessionError> {
    let id = info.get("id").and_then(Value::as_u64).ok_or_else(|| {
        SessionError::MalformedInput(format!("group '{}' has no numeric id", key))
    })?;
    let title = info.get("title").and_then(Value::as_str).ok_or_else(|| {
        SessionError::MalformedInput(format!("group '{}' has no title", key))
    })?;
    if key != id.to_string() {
        return Err(SessionError::MalformedInput(format!(
            "group key '{}' does not match its id {}",
            key, id
        )));
    }
    Ok(GroupSummary {
        key: key.to_string(),
        id,
        title: title.to_string(),
    })
}

/// Stable sort; equal keys keep their incoming order.
pub fn sort_groups(groups: &mut [GroupSummary], sort_key: SortKey) {
    match sort_key {
        SortKey::ByName => groups.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::ById => groups.sort_by_key(|g| g.id),
    }
}
