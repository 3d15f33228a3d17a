use std::sync::mpsc;
use std::thread;

use assistant_core::{AnswerPayload, Effect, FailureKind, Msg, SourceChunk};
use assistant_engine::{AskSettings, EngineError, EngineEvent, EngineEvents, EngineHandle};
use assistant_logging::{assistant_debug, assistant_info, assistant_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: AskSettings, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, event_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendQuestion {
                    request_id,
                    message,
                } => self.engine.ask(request_id, message),
                Effect::CancelRequest { request_id } => self.engine.cancel(request_id),
                Effect::CheckHealth => self.engine.check_health(),
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if event_tx.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnswerCompleted { request_id, result } => {
            let result = match result {
                Ok(payload) => Ok(map_payload(payload)),
                Err(err) => {
                    assistant_debug!("Request {} error detail: {}", request_id, err);
                    Err(map_failure(&err.kind))
                }
            };
            Msg::AnswerReceived { request_id, result }
        }
        EngineEvent::HealthChecked { result } => {
            match &result {
                Ok(()) => assistant_info!("Backend health check passed"),
                Err(err) => assistant_warn!("Backend health check failed: {}", err),
            }
            Msg::BackendHealthChecked {
                healthy: result.is_ok(),
            }
        }
    }
}

fn map_payload(payload: assistant_engine::AnswerPayload) -> AnswerPayload {
    AnswerPayload {
        message: payload.message,
        chunks: payload
            .chunks
            .into_iter()
            .map(|chunk| SourceChunk::new(chunk.metadata.source))
            .collect(),
    }
}

fn map_failure(kind: &assistant_engine::FailureKind) -> FailureKind {
    use assistant_engine::FailureKind as Engine;
    match kind {
        Engine::HttpStatus(code) => FailureKind::HttpStatus(*code),
        Engine::MalformedPayload => FailureKind::MalformedPayload,
        Engine::Cancelled => FailureKind::Cancelled,
        Engine::InvalidUrl | Engine::Timeout | Engine::TooLarge { .. } | Engine::Network => {
            FailureKind::Transport
        }
    }
}
