//! Program assembler — turns a (sheet, box) pair into the final instruction
//! list.
//!
//! `compile` is the single entry point of the cutting core: a pure,
//! deterministic, synchronous function with no I/O. It rejects infeasible
//! sheets before planning, then brackets the per-box net traces in
//! `START`/`STOP` with one emitter shared across all boxes.
//!
//! One cursor is threaded through the whole program. It is never reset to a
//! box origin: the planner seed replaces its `x` once per column and its `y`
//! before every net, and the rest carries over from wherever the previous
//! trace ended. Each net drifts the cursor one box-width right, so box
//! `(i, j)` actually starts at `x = min_width*i + j*width` — inherited from
//! the reference behavior and kept on purpose.

use thiserror::Error;

use crate::cutting::emitter::{Emitter, Instruction};
use crate::cutting::footprint::Footprint;
use crate::cutting::geometry::{BoxDims, Point, SheetDims};
use crate::cutting::grid::GridPlan;
use crate::cutting::path::trace_net;

/// Terminal failure of the cutting core. There is exactly one: the sheet
/// cannot hold a single box footprint in either orientation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Invalid sheet size. Too small for producing at least one box")]
    InfeasibleSheet,
}

/// A complete compiled cutter program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutProgram {
    pub amount: u64,
    pub steps: Vec<Instruction>,
}

/// Compiles the full cutter program for `sheet` and `dims`.
///
/// The feasibility check runs first: without it, an infeasible input would
/// silently compile to an empty zero-box program instead of an error. A sheet
/// that is feasible only in the swapped orientation still compiles — to
/// `amount == 0` with a bare `START`/`STOP` bracket, because the planner
/// never swaps axes. That mismatch is inherited behavior, kept on purpose.
pub fn compile(sheet: SheetDims, dims: BoxDims) -> Result<CutProgram, PlanError> {
    let footprint = Footprint::of(dims);
    if !footprint.fits(sheet) {
        return Err(PlanError::InfeasibleSheet);
    }

    let plan = GridPlan::new(sheet, footprint);
    let mut emitter = Emitter::new();
    let mut steps = Vec::new();
    let mut cursor = Point::ORIGIN;

    steps.push(Instruction::Start);
    for i in 0..plan.count_by_width {
        cursor = Point::new(plan.column_origin_x(i), cursor.y);
        for j in 0..plan.count_by_length {
            cursor = Point::new(cursor.x, plan.row_origin_y(j));
            for mv in trace_net(cursor, dims) {
                emitter.emit(mv, &mut steps);
                cursor = mv.target;
            }
        }
    }
    steps.push(Instruction::Stop);

    Ok(CutProgram {
        amount: plan.amount(),
        steps,
    })
}
