//! Assistant core: pure question/answer state machine and view-model helpers.
mod effect;
mod msg;
mod sources;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AnswerPayload, FailureKind, Msg, SourceChunk};
pub use sources::{
    ResolveSummary, SourceMapping, SourceResolver, DEFAULT_SOURCE_BASE_URL, SOURCE_EXTENSION,
    SOURCE_MARKER,
};
pub use state::{AppState, BackendStatus, RequestId, RequestState, APOLOGY_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
