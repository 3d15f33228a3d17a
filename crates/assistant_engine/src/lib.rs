//! Assistant engine: backend client and effect execution.
mod ask;
mod engine;
mod payload;
mod types;

pub use ask::{AskSettings, Asker, ReqwestAsker, ASK_PATH, HEALTH_PATH};
pub use engine::{EngineEvents, EngineHandle};
pub use payload::{decode_answer, encode_question};
pub use types::{
    AnswerPayload, AskError, ChunkMetadata, ChunkRecord, EngineError, EngineEvent, FailureKind,
    RequestId,
};
