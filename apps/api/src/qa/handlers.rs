//! Axum route handlers for the question-answering API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::qa::context::{build_context, StudentContextRow, TeacherContextRow};
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

/// POST /ask
///
/// Validates the question, renders the context block from at most five
/// students and five teachers, and forwards both to the inference endpoint.
/// The endpoint's JSON body is returned untouched as `data`.
pub async fn ask_question(
    State(state): State<AppState>,
    payload: Option<Json<AskRequest>>,
) -> Result<Json<Envelope<Value>>, AppError> {
    // An absent or malformed body counts as an empty payload.
    let question = payload
        .and_then(|Json(req)| req.question)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Question is required".to_string()))?;

    let students: Vec<StudentContextRow> =
        sqlx::query_as("SELECT first_name, last_name, class FROM students LIMIT 5")
            .fetch_all(&state.db)
            .await?;

    let teachers: Vec<TeacherContextRow> =
        sqlx::query_as("SELECT first_name, last_name, subject FROM teachers LIMIT 5")
            .fetch_all(&state.db)
            .await?;

    let context = build_context(&students, &teachers);

    let answer = state
        .inference
        .ask(&question, &context)
        .await
        .map_err(|e| AppError::Inference(e.to_string()))?;

    Ok(ok(answer))
}
