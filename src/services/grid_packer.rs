//! Grid Packer.
//!
//! Re-assigns the bounding box of every tab group so the groups tile the
//! tab-groups UI in a row-major grid of equally sized boxes:
//!
//! ```text
//!  hs  box  hs  box  hs  box
//!  +---------------------------  vs
//!  |   [0]      [1]      [2]
//!  |                             vs
//!  |   [3]      [4]
//! ```
//!
//! Capacity is checked before anything is written, so a failed pack leaves
//! the group map untouched.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::services::group_extractor::{list_groups, sort_groups};
use crate::types::errors::{ConvertError, LayoutError};
use crate::types::session::{Bounds, GroupMap, GroupSummary, Viewport};
use crate::types::settings::{GridSettings, SortKey};

/// Everything one packing pass needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PackConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub box_width: u32,
    pub box_height: u32,
    pub v_spacing: u32,
    pub h_spacing: u32,
    pub sort_key: SortKey,
}

impl PackConfig {
    pub fn new(settings: &GridSettings, viewport: Viewport) -> Self {
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            box_width: settings.box_width,
            box_height: settings.box_height,
            v_spacing: settings.v_spacing,
            h_spacing: settings.h_spacing,
            sort_key: settings.sort_key,
        }
    }

    fn column_step(&self) -> u64 {
        u64::from(self.h_spacing) + u64::from(self.box_width)
    }

    fn row_step(&self) -> u64 {
        u64::from(self.v_spacing) + u64::from(self.box_height)
    }

    /// Number of boxes that fit side by side.
    pub fn columns(&self) -> Result<u64, LayoutError> {
        let step = self.column_step();
        let columns = if step == 0 {
            0.0
        } else {
            (self.viewport_width / step as f64).floor()
        };
        if !columns.is_finite() || columns < 1.0 {
            return Err(LayoutError::NoColumns {
                viewport_width: self.viewport_width,
                box_width: self.box_width,
                h_spacing: self.h_spacing,
            });
        }
        Ok(columns as u64)
    }

    /// Checks that `group_count` groups fit and returns the column count.
    ///
    /// The row estimate is `count / columns + 1`, which reserves a spare row
    /// when the last row is exactly full.
    pub fn check_capacity(&self, group_count: usize) -> Result<u64, LayoutError> {
        let columns = self.columns()?;
        let rows_needed = group_count as u64 / columns + 1;
        let height_needed = self.row_step() * rows_needed;
        if height_needed as f64 > self.viewport_height {
            return Err(LayoutError::Overflow {
                groups: group_count,
                box_width: self.box_width,
                box_height: self.box_height,
                v_spacing: self.v_spacing,
                h_spacing: self.h_spacing,
                columns: columns.min(u64::from(u32::MAX)) as u32,
                height_needed,
                viewport_width: self.viewport_width,
                viewport_height: self.viewport_height,
            });
        }
        Ok(columns)
    }

    /// Bounds of the box at zero-based `rank` in row-major order.
    pub fn cell(&self, rank: u64, columns: u64) -> Bounds {
        let row = rank / columns;
        let col = rank % columns;
        Bounds {
            top: self.row_step() * row + u64::from(self.v_spacing),
            left: self.column_step() * col + u64::from(self.h_spacing),
            width: u64::from(self.box_width),
            height: u64::from(self.box_height),
        }
    }
}

/// Trait defining the grid layout operations.
pub trait GridPackerTrait {
    fn plan(&self, groups: &[GroupSummary]) -> Result<Vec<(GroupSummary, Bounds)>, LayoutError>;
    fn pack(&self, groups: &mut GroupMap) -> Result<usize, ConvertError>;
}

pub struct GridPacker {
    config: PackConfig,
}

impl GridPacker {
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }
}

impl GridPackerTrait for GridPacker {
    /// Computes the placement of `groups` without touching any metadata.
    ///
    /// The result is in layout order (sorted by the configured key, stable
    /// with respect to the incoming order).
    fn plan(&self, groups: &[GroupSummary]) -> Result<Vec<(GroupSummary, Bounds)>, LayoutError> {
        let columns = self.config.check_capacity(groups.len())?;

        let mut ordered = groups.to_vec();
        sort_groups(&mut ordered, self.config.sort_key);

        Ok(ordered
            .into_iter()
            .enumerate()
            .map(|(rank, group)| {
                let bounds = self.config.cell(rank as u64, columns);
                (group, bounds)
            })
            .collect())
    }

    /// Writes fresh `bounds` into every group of `groups`.
    ///
    /// Returns how many groups were placed; callers compare it with the
    /// number of groups they started with.
    fn pack(&self, groups: &mut GroupMap) -> Result<usize, ConvertError> {
        let summaries = list_groups(groups)?;
        let placements = self.plan(&summaries)?;

        let mut placed = 0;
        for (group, bounds) in &placements {
            let Some(Value::Object(info)) = groups.get_mut(&group.key) else {
                continue;
            };
            debug!(
                id = group.id,
                title = %group.title,
                top = bounds.top,
                left = bounds.left,
                "placed group"
            );
            info.insert(
                "bounds".to_string(),
                json!({
                    "top": bounds.top,
                    "left": bounds.left,
                    "width": bounds.width,
                    "height": bounds.height,
                }),
            );
            placed += 1;
        }
        info!(groups = placed, "packed tab groups into grid");
        Ok(placed)
    }
}
