use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cutting::emitter::Instruction;
use crate::cutting::program::compile;
use crate::cutting::validation::parse_request;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct CutResponse {
    pub success: bool,
    pub amount: u64,
    pub program: Vec<Instruction>,
}

/// POST /api/v1/cut
///
/// The body arrives as raw JSON so that every shape failure — missing keys,
/// wrong types, non-positive values — maps to the one input-format error of
/// the contract instead of an extractor rejection. A fresh emitter and cursor
/// are built inside `compile` per request; nothing is shared across calls.
pub async fn handle_cut(Json(body): Json<Value>) -> Result<Json<CutResponse>, AppError> {
    let request = parse_request(&body)?;
    let program = compile(request.sheet, request.dims)?;

    info!(
        amount = program.amount,
        steps = program.steps.len(),
        "compiled cut program"
    );

    Ok(Json(CutResponse {
        success: true,
        amount: program.amount,
        program: program.steps,
    }))
}
