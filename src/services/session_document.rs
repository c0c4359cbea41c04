//! Session store document access.
//!
//! Wraps the parsed `sessionstore.js` JSON and knows where the interesting
//! pieces live: `windows[i].tabs`, and the two string-encoded JSON fields
//! `extData["tabview-group"]` and `extData["tabview-ui"]`. Those two are
//! decoded on read and re-encoded to a string on write; the decoded form is
//! never stored back.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::types::errors::SessionError;
use crate::types::session::{GroupMap, Viewport};

pub const GROUP_FIELD: &str = "tabview-group";
pub const UI_FIELD: &str = "tabview-ui";

/// Trait defining access to the pieces of a session document.
pub trait SessionDocumentTrait {
    fn window_count(&self) -> usize;
    fn window(&self, index: usize) -> Result<&Value, SessionError>;
    fn group_metadata(&self, window_index: usize) -> Result<GroupMap, SessionError>;
    fn set_group_metadata(
        &mut self,
        window_index: usize,
        groups: &GroupMap,
    ) -> Result<(), SessionError>;
    fn viewport(&self, window_index: usize) -> Result<Viewport, SessionError>;
}

/// A parsed session store document.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDocument {
    root: Value,
}

/// Reads and parses a session file.
pub fn load_document(path: &Path) -> Result<SessionDocument, SessionError> {
    let content = fs::read_to_string(path).map_err(|e| {
        SessionError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let doc = content.parse::<SessionDocument>()?;
    debug!(path = %path.display(), windows = doc.window_count(), "loaded session document");
    Ok(doc)
}

impl FromStr for SessionDocument {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let root: Value = serde_json::from_str(s)
            .map_err(|e| SessionError::MalformedInput(format!("session JSON: {}", e)))?;
        Ok(Self::from_value(root))
    }
}

impl SessionDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Compact serialization of the whole document.
    pub fn to_json_string(&self) -> Result<String, SessionError> {
        serde_json::to_string(&self.root)
            .map_err(|e| SessionError::MalformedInput(format!("session JSON: {}", e)))
    }

    fn windows(&self) -> Result<&Vec<Value>, SessionError> {
        self.root
            .get("windows")
            .and_then(Value::as_array)
            .ok_or_else(|| SessionError::MissingField("windows".to_string()))
    }

    fn window_mut(&mut self, index: usize) -> Result<&mut Value, SessionError> {
        let windows = self
            .root
            .get_mut("windows")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| SessionError::MissingField("windows".to_string()))?;
        let count = windows.len();
        windows
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, count })
    }

    /// Decodes one of the string-encoded JSON fields of a window's `extData`.
    fn ext_data_json(&self, window_index: usize, field: &str) -> Result<Value, SessionError> {
        let window = self.window(window_index)?;
        let raw = window
            .get("extData")
            .and_then(|ext| ext.get(field))
            .ok_or_else(|| {
                SessionError::MissingField(format!("windows[{}].extData.{}", window_index, field))
            })?;
        let encoded = raw.as_str().ok_or_else(|| {
            SessionError::MalformedInput(format!(
                "windows[{}].extData.{} is not a string",
                window_index, field
            ))
        })?;
        serde_json::from_str(encoded).map_err(|e| {
            SessionError::MalformedInput(format!(
                "windows[{}].extData.{}: {}",
                window_index, field, e
            ))
        })
    }
}

impl SessionDocumentTrait for SessionDocument {
    /// Number of windows, zero when the `windows` array is absent.
    fn window_count(&self) -> usize {
        self.windows().map(Vec::len).unwrap_or(0)
    }

    fn window(&self, index: usize) -> Result<&Value, SessionError> {
        let windows = self.windows()?;
        windows.get(index).ok_or(SessionError::IndexOutOfRange {
            index,
            count: windows.len(),
        })
    }

    fn group_metadata(&self, window_index: usize) -> Result<GroupMap, SessionError> {
        match self.ext_data_json(window_index, GROUP_FIELD)? {
            Value::Object(map) => Ok(map),
            _ => Err(SessionError::MalformedInput(format!(
                "windows[{}].extData.{} is not a JSON object",
                window_index, GROUP_FIELD
            ))),
        }
    }

    /// Re-encodes `groups` to a string and stores it in `tabview-group`.
    fn set_group_metadata(
        &mut self,
        window_index: usize,
        groups: &GroupMap,
    ) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(groups)
            .map_err(|e| SessionError::MalformedInput(format!("group metadata: {}", e)))?;
        let window = self.window_mut(window_index)?;
        let ext = window
            .get_mut("extData")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                SessionError::MissingField(format!("windows[{}].extData", window_index))
            })?;
        ext.insert(GROUP_FIELD.to_string(), Value::String(encoded));
        Ok(())
    }

    fn viewport(&self, window_index: usize) -> Result<Viewport, SessionError> {
        let ui = self.ext_data_json(window_index, UI_FIELD)?;
        let bounds = ui.get("pageBounds").ok_or_else(|| {
            SessionError::MissingField(format!("{}.pageBounds", UI_FIELD))
        })?;
        let dimension = |name: &str| {
            bounds.get(name).and_then(Value::as_f64).ok_or_else(|| {
                SessionError::MissingField(format!("{}.pageBounds.{}", UI_FIELD, name))
            })
        };
        Ok(Viewport {
            width: dimension("width")?,
            height: dimension("height")?,
        })
    }
}
