use serde::Deserialize;
use serde_json::json;

use crate::{AnswerPayload, AskError, FailureKind};

#[derive(Debug, Deserialize)]
struct AnswerEnvelope {
    payload: AnswerPayload,
}

/// Request body for the ask endpoint: `{"message": "<question>"}`.
pub fn encode_question(message: &str) -> String {
    json!({ "message": message }).to_string()
}

/// Decode a success body. Anything without a string `payload.message` and a
/// `payload.chunks` array of `{metadata: {source}}` records is malformed.
pub fn decode_answer(body: &[u8]) -> Result<AnswerPayload, AskError> {
    serde_json::from_slice::<AnswerEnvelope>(body)
        .map(|envelope| envelope.payload)
        .map_err(|err| AskError::new(FailureKind::MalformedPayload, err.to_string()))
}
