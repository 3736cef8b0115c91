//! Axum route handlers for the teacher records API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::teacher::Teacher;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateTeacherRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateTeacherResponse {
    pub id: i64,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// POST /teachers
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Option<Json<CreateTeacherRequest>>,
) -> Result<Json<Envelope<CreateTeacherResponse>>, AppError> {
    // An absent or malformed body counts as an empty payload.
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    let (Some(first_name), Some(last_name)) =
        (present(req.first_name), present(req.last_name))
    else {
        return Err(AppError::Validation(
            "first_name and last_name required".to_string(),
        ));
    };

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO teachers (first_name, last_name, subject) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(req.subject)
    .fetch_one(&state.db)
    .await?;

    Ok(ok(CreateTeacherResponse { id }))
}

/// GET /teachers
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Teacher>>>, AppError> {
    let rows: Vec<Teacher> =
        sqlx::query_as("SELECT * FROM teachers ORDER BY last_name, first_name")
            .fetch_all(&state.db)
            .await?;

    Ok(ok(rows))
}
