//! Grid planner — tiles whole box footprints over the sheet.
//!
//! The tiling is a fixed-size grid: `sheet.width / min_width` columns by
//! `sheet.length / min_length` rows, walked column by column. The planner
//! hands the assembler per-axis origin seeds rather than full cell origins:
//! the cutter cursor's `x` is re-seeded once per column and `y` once per row,
//! and otherwise carries over from the previous net (see `program`).

use crate::cutting::footprint::Footprint;
use crate::cutting::geometry::SheetDims;

/// Result of planning one sheet: how many whole footprints fit per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    footprint: Footprint,
    pub count_by_width: u64,
    pub count_by_length: u64,
}

impl GridPlan {
    pub fn new(sheet: SheetDims, footprint: Footprint) -> Self {
        GridPlan {
            footprint,
            count_by_width: u64::from(sheet.width) / footprint.min_width,
            count_by_length: u64::from(sheet.length) / footprint.min_length,
        }
    }

    /// Total number of boxes this plan places.
    pub fn amount(&self) -> u64 {
        self.count_by_width * self.count_by_length
    }

    /// Cursor `x` seed for column `i`. Applied once when the column starts.
    pub fn column_origin_x(&self, i: u64) -> i64 {
        (self.footprint.min_width * i) as i64
    }

    /// Cursor `y` seed for row `j`. Applied before every net in the column.
    pub fn row_origin_y(&self, j: u64) -> i64 {
        (self.footprint.min_length * j) as i64
    }
}
