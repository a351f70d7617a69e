//! Boundary validation of the raw cut request body.
//!
//! The rules are declarative: every field below must be present and a
//! positive integer. Any violation — missing key, wrong type, float, zero or
//! negative value — collapses to the single input-shape error, so the core
//! downstream can assume well-formed positive dimensions and never
//! re-validates.

use serde_json::Value;
use thiserror::Error;

use crate::cutting::geometry::{BoxDims, SheetDims};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input format. Please use only positive integers")]
pub struct InputShapeError;

/// A fully validated cut request: guaranteed positive integer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutRequest {
    pub sheet: SheetDims,
    pub dims: BoxDims,
}

/// JSON pointers of every required positive-integer field.
const REQUIRED_FIELDS: &[&str] = &[
    "/sheetSize/w",
    "/sheetSize/l",
    "/boxSize/w",
    "/boxSize/d",
    "/boxSize/h",
];

/// Validates the raw body against the rule set and builds a `CutRequest`.
pub fn parse_request(body: &Value) -> Result<CutRequest, InputShapeError> {
    for pointer in REQUIRED_FIELDS {
        positive_int(body, pointer)?;
    }

    Ok(CutRequest {
        sheet: SheetDims {
            width: positive_int(body, "/sheetSize/w")?,
            length: positive_int(body, "/sheetSize/l")?,
        },
        dims: BoxDims {
            width: positive_int(body, "/boxSize/w")?,
            depth: positive_int(body, "/boxSize/d")?,
            height: positive_int(body, "/boxSize/h")?,
        },
    })
}

/// Resolves one field and checks it is an integer in `[1, u32::MAX]`.
/// Floats fail `as_u64` even when whole-valued, which is what we want.
fn positive_int(body: &Value, pointer: &str) -> Result<u32, InputShapeError> {
    body.pointer(pointer)
        .and_then(Value::as_u64)
        .filter(|&n| n >= 1 && n <= u64::from(u32::MAX))
        .map(|n| n as u32)
        .ok_or(InputShapeError)
}
