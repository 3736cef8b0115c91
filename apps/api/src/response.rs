use axum::Json;
use serde::Serialize;

/// The uniform success envelope: `{"status": "ok", "data": ...}`.
/// Every successful route responds with HTTP 200 wrapped in this shape.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { status: "ok", data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let Json(envelope) = ok(json!({"id": 7}));
        let serialized = serde_json::to_string(&envelope).unwrap();
        assert_eq!(serialized, r#"{"status":"ok","data":{"id":7}}"#);
    }

    #[test]
    fn test_envelope_wraps_lists() {
        let Json(envelope) = ok(vec![1, 2, 3]);
        let serialized = serde_json::to_value(&envelope).unwrap();
        assert_eq!(serialized, json!({"status": "ok", "data": [1, 2, 3]}));
    }
}
