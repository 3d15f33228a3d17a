use assistant_logging::{assistant_debug, assistant_info, assistant_warn};

use crate::{AppState, BackendStatus, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.set_backend(BackendStatus::Checking);
            vec![Effect::CheckHealth]
        }
        Msg::QuestionChanged(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let message = state.question().to_string();
            let request_id = state.begin_request();
            vec![Effect::SendQuestion {
                request_id,
                message,
            }]
        }
        Msg::NewQuestionClicked => match state.reset() {
            Some(request_id) => vec![Effect::CancelRequest { request_id }],
            None => Vec::new(),
        },
        Msg::AnswerReceived { request_id, result } => {
            if !state.is_awaiting(request_id) {
                assistant_debug!("Dropping response for stale request {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(payload) => {
                    let summary = state.apply_answer(payload);
                    assistant_info!(
                        "Request {} answered: {} new source(s), {} duplicate(s), {} unmapped",
                        request_id,
                        summary.added,
                        summary.duplicates,
                        summary.unmapped
                    );
                }
                Err(kind) => {
                    assistant_warn!("Request {} failed: {}", request_id, kind);
                    state.apply_failure();
                }
            }
            Vec::new()
        }
        Msg::BackendHealthChecked { healthy } => {
            state.set_backend(if healthy {
                BackendStatus::Online
            } else {
                BackendStatus::Unreachable
            });
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
