/// Inference client: the single point of entry for all question-answering
/// API calls in this service.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All outbound QA interactions MUST go through this module.
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The extractive-QA model served by the hosted inference endpoint.
/// Intentionally hardcoded; the service targets exactly one model.
pub const MODEL: &str = "deepset/tinyroberta-squad2";

const INFERENCE_API_URL: &str =
    "https://api-inference.huggingface.co/models/deepset/tinyroberta-squad2";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Wire payload for the extractive-QA task: the question plus the text the
/// answer must be extracted from.
#[derive(Debug, Serialize)]
struct QaPayload<'a> {
    question: &'a str,
    context: &'a str,
}

/// HTTP client for the hosted question-answering endpoint.
/// One call per request, no retries.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    token: String,
}

impl InferenceClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    /// Forwards a question and its context block to the inference endpoint
    /// and returns the endpoint's JSON body untouched.
    pub async fn ask(&self, question: &str, context: &str) -> Result<Value, InferenceError> {
        let response = self
            .client
            .post(INFERENCE_API_URL)
            .bearer_auth(&self.token)
            .json(&QaPayload { question, context })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        debug!("Inference call succeeded ({} bytes of context)", context.len());

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let payload = QaPayload {
            question: "Who teaches Math?",
            context: "Teachers:\nTom Roy teaches Math\n",
        };
        let serialized = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({
                "question": "Who teaches Math?",
                "context": "Teachers:\nTom Roy teaches Math\n"
            })
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = InferenceError::Api {
            status: 503,
            message: "model loading".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 503): model loading");
    }
}
