//! App Core for sessionfiddle.
//!
//! Runs the user-facing actions against a loaded session document: listing
//! groups, tidying the group layout into a grid, and exporting each group as
//! a uzbl session file. File writes are create-new only, so neither the input
//! nor an earlier result is ever overwritten.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{info, warn};

use crate::managers::tab_grouper::build_tab_index;
use crate::services::format_emitter::{render_group_as_text, session_file_name};
use crate::services::grid_packer::{GridPacker, GridPackerTrait, PackConfig};
use crate::services::group_extractor::{list_groups, sort_groups};
use crate::services::session_document::{SessionDocument, SessionDocumentTrait};
use crate::types::errors::ConvertError;
use crate::types::session::GroupSummary;
use crate::types::settings::{GridSettings, SortKey};

/// What to do with the session file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Print the tab groups of a window.
    ListGroups,
    /// Rewrite the group layout as a tidy grid into a new session file.
    PrettifyGrid,
    /// Write one uzbl session file per tab group.
    ExportUzbl,
}

impl Action {
    /// Actions that write a modified copy of the session file.
    pub fn changes_session(self) -> bool {
        matches!(self, Action::PrettifyGrid)
    }
}

/// Outcome of a successful `prettify-grid` run.
#[derive(Debug, Clone, PartialEq)]
pub struct PrettifyReport {
    pub groups: usize,
    pub output: PathBuf,
    pub settings: GridSettings,
}

/// Validates input and output paths before any work is done.
pub fn check_paths(
    action: Action,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputMissing(input.display().to_string()));
    }
    if action.changes_session() {
        let output = output.ok_or(ConvertError::MissingOutput)?;
        if output == input {
            return Err(ConvertError::SameAsInput(output.display().to_string()));
        }
        if output.exists() {
            return Err(ConvertError::OutputExists(output.display().to_string()));
        }
    }
    Ok(())
}

/// Holds the grid settings in effect for this run.
pub struct App {
    pub settings: GridSettings,
}

impl App {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    /// Groups of `window`, ordered by `sort_key`.
    pub fn list_groups(
        &self,
        doc: &SessionDocument,
        window: usize,
        sort_key: SortKey,
    ) -> Result<Vec<GroupSummary>, ConvertError> {
        let metadata = doc.group_metadata(window)?;
        let mut groups = list_groups(&metadata)?;
        sort_groups(&mut groups, sort_key);
        Ok(groups)
    }

    /// Packs the groups of `window` into a grid and writes the whole document
    /// to `output`.
    pub fn prettify_grid(
        &self,
        doc: &mut SessionDocument,
        window: usize,
        output: &Path,
    ) -> Result<PrettifyReport, ConvertError> {
        let mut metadata = doc.group_metadata(window)?;
        let viewport = doc.viewport(window)?;
        let before = metadata.len();

        let packer = GridPacker::new(PackConfig::new(&self.settings, viewport));
        let after = packer.pack(&mut metadata)?;
        if before != after {
            return Err(ConvertError::Consistency { before, after });
        }

        doc.set_group_metadata(window, &metadata)?;
        let json = doc.to_json_string()?;
        write_new_file(output, json.as_bytes())?;

        info!(groups = after, output = %output.display(), "wrote tidied session");
        Ok(PrettifyReport {
            groups: after,
            output: output.to_path_buf(),
            settings: self.settings.clone(),
        })
    }

    /// Writes one uzbl session file per group of `window` into `output_dir`.
    ///
    /// Groups without tabs get a header-only file. Returns the written paths
    /// in group id order.
    pub fn export_uzbl(
        &self,
        doc: &SessionDocument,
        window: usize,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let mut groups = list_groups(&doc.group_metadata(window)?)?;
        sort_groups(&mut groups, SortKey::ById);
        let index = build_tab_index(doc.window(window)?)?;

        let known: HashSet<u64> = groups.iter().map(|g| g.id).collect();
        for (group_id, tabs) in index.iter() {
            if !known.contains(&group_id) {
                warn!(group_id, tabs = tabs.len(), "tabs belong to an unknown group, skipping");
            }
        }

        fs::create_dir_all(output_dir).map_err(|e| {
            ConvertError::Io(format!("Failed to create {}: {}", output_dir.display(), e))
        })?;

        let mut used: HashSet<String> = HashSet::new();
        let mut written = Vec::with_capacity(groups.len());
        for group in &groups {
            let base = session_file_name(&group.title, group.id);
            let name = unique_file_name(&base, group.id, &mut used);
            let lines = render_group_as_text(index.get(group.id).unwrap_or(&[]));
            let path = output_dir.join(&name);
            write_new_file(&path, lines.concat().as_bytes())?;
            written.push(path);
        }

        info!(files = written.len(), dir = %output_dir.display(), "exported uzbl sessions");
        Ok(written)
    }
}

/// Claims `base` in `used`, or the first free of `base_<id>`, `base_<id>_2`, ...
fn unique_file_name(base: &str, group_id: u64, used: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut attempt = 1;
    while !used.insert(name.clone()) {
        name = if attempt == 1 {
            format!("{}_{}", base, group_id)
        } else {
            format!("{}_{}_{}", base, group_id, attempt)
        };
        attempt += 1;
    }
    name
}

fn write_new_file(path: &Path, contents: &[u8]) -> Result<(), ConvertError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => {
                ConvertError::OutputExists(path.display().to_string())
            }
            _ => ConvertError::Io(format!("Failed to create {}: {}", path.display(), e)),
        })?;
    file.write_all(contents)
        .map_err(|e| ConvertError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
