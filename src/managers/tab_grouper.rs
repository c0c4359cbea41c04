//! Tab Grouper.
//!
//! Walks a window's tab list and buckets each tab, reduced to `{url, title}`,
//! under the group id found in its `tabview-tab` membership tag.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::types::errors::SessionError;
use crate::types::tab::{TabRecord, UNTITLED};

/// Tabs bucketed by group id.
///
/// Buckets keep the original tab order; groups are remembered in the order
/// they were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabIndex {
    buckets: HashMap<u64, Vec<TabRecord>>,
    group_order: Vec<u64>,
}

impl TabIndex {
    pub fn get(&self, group_id: u64) -> Option<&[TabRecord]> {
        self.buckets.get(&group_id).map(Vec::as_slice)
    }

    pub fn group_count(&self) -> usize {
        self.group_order.len()
    }

    pub fn tab_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Group ids in first-seen order.
    pub fn group_ids(&self) -> &[u64] {
        &self.group_order
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &[TabRecord])> + '_ {
        self.group_order
            .iter()
            .map(move |id| (*id, self.buckets[id].as_slice()))
    }

    fn push(&mut self, group_id: u64, record: TabRecord) {
        if !self.buckets.contains_key(&group_id) {
            self.group_order.push(group_id);
        }
        self.buckets.entry(group_id).or_default().push(record);
    }
}

/// Builds the tabs-by-group index for one window.
///
/// A tab without a readable membership tag is an error, not skipped: every
/// tab in a session with tab groups belongs to some group.
pub fn build_tab_index(window: &Value) -> Result<TabIndex, SessionError> {
    let tabs = window
        .get("tabs")
        .and_then(Value::as_array)
        .ok_or_else(|| SessionError::MissingField("tabs".to_string()))?;

    let mut index = TabIndex::default();
    for (position, tab) in tabs.iter().enumerate() {
        let group_id = membership(position, tab)?;
        let record = tab_record(position, tab)?;
        index.push(group_id, record);
    }
    debug!(
        tabs = index.tab_count(),
        groups = index.group_count(),
        "built tab index"
    );
    Ok(index)
}

fn membership(position: usize, tab: &Value) -> Result<u64, SessionError> {
    let encoded = tab
        .get("extData")
        .and_then(|ext| ext.get("tabview-tab"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            SessionError::MalformedInput(format!("tabs[{}] has no tabview-tab tag", position))
        })?;
    let tag: Value = serde_json::from_str(encoded).map_err(|e| {
        SessionError::MalformedInput(format!("tabs[{}].extData.tabview-tab: {}", position, e))
    })?;
    tag.get("groupID").and_then(Value::as_u64).ok_or_else(|| {
        SessionError::MalformedInput(format!("tabs[{}] tabview-tab has no groupID", position))
    })
}

fn tab_record(position: usize, tab: &Value) -> Result<TabRecord, SessionError> {
    let first = tab
        .get("entries")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first());
    let Some(entry) = first else {
        return Ok(TabRecord::blank());
    };
    let url = entry.get("url").and_then(Value::as_str).ok_or_else(|| {
        SessionError::MalformedInput(format!("tabs[{}].entries[0] has no url", position))
    })?;
    let title = entry
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(UNTITLED);
    Ok(TabRecord {
        url: url.to_string(),
        title: title.to_string(),
    })
}
