//! Path generator — traces the cut outline of one box's unfolded net.
//!
//! The net is a cross shape cut as two overlapping rectangles: the flap cuts
//! at the bottom of the cell, then the long body outline. The trace is a
//! fixed 15-move sequence of relative offsets applied cumulatively from the
//! carried cursor position; moves 1, 4 and 15 are raised relocations, the
//! rest cut.
//!
//! Zero-length moves (a box with degenerate depth or height) are emitted
//! unchanged — only tool-state no-ops are ever elided, and that happens in
//! the emitter, never here.

use crate::cutting::geometry::{BoxDims, Point};

/// Whether the tool must be raised or lowered while travelling to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Reposition with the tool up; no material is cut.
    Raised,
    /// Cut a straight segment with the tool down.
    Cut,
}

/// One straight-line cutter head movement to an absolute target point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMove {
    pub kind: MoveKind,
    pub target: Point,
}

/// Emits the 15-move net trace for one box starting from `start` — wherever
/// the previous net finished, after the assembler's per-axis reseeding. The
/// trace is never re-anchored to a cell origin; it finishes level with
/// `start`, one box-width to its right, and that drift carries into the next
/// box in the column.
pub fn trace_net(start: Point, dims: BoxDims) -> Vec<PathMove> {
    let w = i64::from(dims.width);
    let d = i64::from(dims.depth);
    let h = i64::from(dims.height);

    let mut cursor = start;
    let mut moves = Vec::with_capacity(15);
    let mut push = |cursor: &mut Point, dx: i64, dy: i64, kind: MoveKind| {
        *cursor = cursor.offset(dx, dy);
        moves.push(PathMove {
            kind,
            target: *cursor,
        });
    };

    // Bottom flap: hop right, cut a height-square notch open.
    push(&mut cursor, h, 0, MoveKind::Raised);
    push(&mut cursor, 0, h, MoveKind::Cut);
    push(&mut cursor, -h, 0, MoveKind::Cut);

    // Hop up past the body depth, then cut the full cross outline clockwise.
    push(&mut cursor, 0, d, MoveKind::Raised);
    push(&mut cursor, h, 0, MoveKind::Cut);
    push(&mut cursor, 0, h, MoveKind::Cut);
    push(&mut cursor, w, 0, MoveKind::Cut);
    push(&mut cursor, 0, -h, MoveKind::Cut);
    push(&mut cursor, h, 0, MoveKind::Cut);
    push(&mut cursor, w, 0, MoveKind::Cut);
    push(&mut cursor, 0, -d, MoveKind::Cut);
    push(&mut cursor, -w, 0, MoveKind::Cut);
    push(&mut cursor, -h, 0, MoveKind::Cut);
    push(&mut cursor, 0, -h, MoveKind::Cut);

    // Raise and pull back off the finished net.
    push(&mut cursor, -h, 0, MoveKind::Raised);

    moves
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
    fn test_trace_has_fifteen_moves() {
        assert_eq!(trace_net(Point::ORIGIN, cube10()).len(), 15);
    }

    #[test]
    fn test_trace_kinds_in_order() {
        let kinds: Vec<MoveKind> = trace_net(Point::ORIGIN, cube10())
            .iter()
            .map(|m| m.kind)
            .collect();
        let expected = [
            MoveKind::Raised,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Raised,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Cut,
            MoveKind::Raised,
        ];
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_trace_absolute_targets_from_origin() {
        let targets: Vec<Point> = trace_net(Point::ORIGIN, cube10())
            .iter()
            .map(|m| m.target)
            .collect();
        assert_eq!(
            targets,
            vec![
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
                Point::new(0, 20),
                Point::new(10, 20),
                Point::new(10, 30),
                Point::new(20, 30),
                Point::new(20, 20),
                Point::new(30, 20),
                Point::new(40, 20),
                Point::new(40, 10),
                Point::new(30, 10),
                Point::new(20, 10),
                Point::new(20, 0),
                Point::new(10, 0),
            ]
        );
    }

    #[test]
    fn test_trace_translates_with_start() {
        let at_origin = trace_net(Point::ORIGIN, cube10());
        let shifted = trace_net(Point::new(40, 30), cube10());
        for (a, b) in at_origin.iter().zip(&shifted) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(b.target, a.target.offset(40, 30));
        }
    }

    #[test]
    fn test_trace_displacement_nets_to_width() {
        // The offsets cancel on both axes except one +width: the cursor ends
        // level with the origin, one box-width to its right.
        let moves = trace_net(Point::new(40, 30), cube10());
        assert_eq!(moves.last().unwrap().target, Point::new(50, 30));
    }

    #[test]
    fn test_degenerate_height_still_emits_all_moves() {
        // height 0 is rejected upstream, but the tracer itself never elides
        // zero-length segments.
        let flat = BoxDims {
            width: 10,
            depth: 10,
            height: 0,
        };
        let moves = trace_net(Point::ORIGIN, flat);
        assert_eq!(moves.len(), 15);
        assert_eq!(moves[0].target, Point::ORIGIN); // zero-length hop kept
    }
}
