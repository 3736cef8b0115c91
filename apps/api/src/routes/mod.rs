pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::qa::handlers as qa_handlers;
use crate::state::AppState;
use crate::students::handlers as student_handlers;
use crate::teachers::handlers as teacher_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ask", post(qa_handlers::ask_question))
        .route(
            "/students",
            post(student_handlers::create_student).get(student_handlers::list_students),
        )
        .route(
            "/teachers",
            post(teacher_handlers::create_teacher).get(teacher_handlers::list_teachers),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::build_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health_responds_ok() {
        let response = build_router(AppState::for_tests())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = build_router(AppState::for_tests())
            .oneshot(
                Request::builder()
                    .uri("/classes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
