//! Axum route handlers for the student records API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::student::Student;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub roll_no: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    #[serde(rename = "class")]
    pub class_name: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// POST /students
///
/// Inserts one row and responds with the store-assigned identifier.
pub async fn create_student(
    State(state): State<AppState>,
    payload: Option<Json<CreateStudentRequest>>,
) -> Result<Json<Envelope<CreateStudentResponse>>, AppError> {
    // An absent or malformed body counts as an empty payload.
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    let (Some(first_name), Some(last_name), Some(class_name)) = (
        present(req.first_name),
        present(req.last_name),
        present(req.class_name),
    ) else {
        return Err(AppError::Validation(
            "first_name, last_name and class are required".to_string(),
        ));
    };

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO students (first_name, last_name, class, roll_no) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(class_name)
    .bind(req.roll_no)
    .fetch_one(&state.db)
    .await?;

    Ok(ok(CreateStudentResponse { id }))
}

/// GET /students
///
/// Returns the entire result set; the optional `class` query parameter
/// narrows it to one class. An empty `class=` is treated as no filter.
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ListStudentsQuery>,
) -> Result<Json<Envelope<Vec<Student>>>, AppError> {
    let rows: Vec<Student> = match params.class_name.filter(|c| !c.is_empty()) {
        Some(class_name) => {
            sqlx::query_as(
                "SELECT * FROM students WHERE class = $1 ORDER BY last_name, first_name",
            )
            .bind(class_name)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM students ORDER BY class, last_name, first_name")
                .fetch_all(&state.db)
                .await?
        }
    };

    Ok(ok(rows))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::state::AppState;

    async fn post_students(json: &str) -> (StatusCode, serde_json::Value) {
        let response = build_router(AppState::for_tests())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/students")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_class_is_rejected() {
        let (status, body) =
            post_students(r#"{"first_name": "Ann", "last_name": "Lee"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "first_name, last_name and class are required");
    }

    #[tokio::test]
    async fn test_missing_first_name_is_rejected() {
        let (status, body) = post_students(r#"{"last_name": "Lee", "class": "5A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_empty_required_field_is_rejected() {
        let (status, _) =
            post_students(r#"{"first_name": "", "last_name": "Lee", "class": "5A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let (status, body) = post_students("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "first_name, last_name and class are required");
    }
}
