// Cutting core: footprint feasibility, grid tiling, net tracing, and the
// cutter instruction state machine. Everything below `handlers` is pure and
// synchronous — no I/O, no shared state across requests.

pub mod emitter;
pub mod footprint;
pub mod geometry;
pub mod grid;
pub mod handlers;
pub mod path;
pub mod program;
pub mod validation;
