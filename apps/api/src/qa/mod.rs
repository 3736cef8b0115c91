// Question answering over the school records.
// Builds a plain-text context block from the store and forwards it together
// with the caller's question. All outbound calls go through the inference
// module; no direct API calls here.

pub mod context;
pub mod handlers;
