//! Plain value types for the cutting core.
//!
//! All dimensions are positive integers in sheet units; the validation layer
//! guarantees this before any of these types are constructed, so the core
//! performs no defensive re-checks.

use serde::{Deserialize, Serialize};

/// Dimensions of one box to cut, before unfolding into its flat net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxDims {
    pub width: u32,
    pub depth: u32,
    pub height: u32,
}

/// Dimensions of the flat stock sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDims {
    pub width: u32,
    pub length: u32,
}

/// Cutter head position. A `Copy` value replaced on every step of path
/// generation — never a shared mutable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Returns the point shifted by `(dx, dy)`.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
