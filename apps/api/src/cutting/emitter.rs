//! Cutter instruction emitter — a two-state machine over the tool's vertical
//! position.
//!
//! The cutter protocol requires the tool raised before relocations and
//! lowered before cuts, but tolerates no redundant toggles: a state
//! instruction is emitted only when it changes the tool's state. One emitter
//! lives for the whole program, so the state carries across box boundaries.

use serde::{Deserialize, Serialize};

use crate::cutting::path::{MoveKind, PathMove};

/// One instruction in the final cutter program.
///
/// Serializes to the wire contract: `{"command":"START"}`,
/// `{"command":"GOTO","x":..,"y":..}` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Instruction {
    #[serde(rename = "START")]
    Start,
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
    #[serde(rename = "GOTO")]
    Goto { x: i64, y: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolState {
    Up,
    Down,
}

/// Tracks the tool's vertical position across one whole program.
/// Constructed fresh per computation — never shared between requests.
#[derive(Debug)]
pub struct Emitter {
    tool: ToolState,
}

impl Emitter {
    /// The tool starts raised before any box is processed.
    pub fn new() -> Self {
        Emitter {
            tool: ToolState::Up,
        }
    }

    /// Converts one path move into at most one state instruction followed by
    /// exactly one `Goto`, appended to `program`.
    pub fn emit(&mut self, mv: PathMove, program: &mut Vec<Instruction>) {
        let wanted = match mv.kind {
            MoveKind::Raised => ToolState::Up,
            MoveKind::Cut => ToolState::Down,
        };
        if self.tool != wanted {
            program.push(match wanted {
                ToolState::Up => Instruction::Up,
                ToolState::Down => Instruction::Down,
            });
            self.tool = wanted;
        }
        program.push(Instruction::Goto {
            x: mv.target.x,
            y: mv.target.y,
        });
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
