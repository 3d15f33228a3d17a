use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use assistant_logging::{assistant_debug, assistant_info};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::ask::{AskSettings, Asker, ReqwestAsker};
use crate::{AskError, EngineError, EngineEvent, FailureKind, RequestId};

enum EngineCommand {
    Ask { request_id: RequestId, message: String },
    Cancel { request_id: RequestId },
    CheckHealth,
}

/// Sending half of the engine. Dropping it stops the engine thread and
/// aborts whatever is still running.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving half of the engine.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: AskSettings) -> Result<(Self, EngineEvents), EngineError> {
        let asker = ReqwestAsker::new(settings).map_err(|err| EngineError::Client(err.message))?;
        Self::with_asker(Arc::new(asker))
    }

    pub fn with_asker(asker: Arc<dyn Asker>) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = Runtime::new()?;

        thread::Builder::new()
            .name("assistant-engine".to_string())
            .spawn(move || run_commands(runtime, asker, cmd_rx, event_tx))?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn ask(&self, request_id: RequestId, message: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ask {
            request_id,
            message: message.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn run_commands(
    runtime: Runtime,
    asker: Arc<dyn Asker>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut in_flight: Option<(RequestId, CancellationToken)> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Ask {
                request_id,
                message,
            } => {
                let token = CancellationToken::new();
                if let Some((previous, stale)) = in_flight.replace((request_id, token.clone())) {
                    assistant_debug!("Request {} superseded by {}", previous, request_id);
                    stale.cancel();
                }
                assistant_info!(
                    "Sending request {} ({} chars)",
                    request_id,
                    message.chars().count()
                );
                let asker = asker.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => {
                            Err(AskError::new(FailureKind::Cancelled, "request cancelled"))
                        }
                        result = asker.ask(&message) => result,
                    };
                    assistant_debug!("Request {} finished, ok={}", request_id, result.is_ok());
                    let _ = event_tx.send(EngineEvent::AnswerCompleted { request_id, result });
                });
            }
            EngineCommand::Cancel { request_id } => match &in_flight {
                Some((current, token)) if *current == request_id => {
                    assistant_info!("Cancelling request {}", request_id);
                    token.cancel();
                }
                _ => assistant_debug!("Cancel for unknown request {} ignored", request_id),
            },
            EngineCommand::CheckHealth => {
                let asker = asker.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = asker.health().await;
                    let _ = event_tx.send(EngineEvent::HealthChecked { result });
                });
            }
        }
    }

    assistant_debug!("Engine command channel closed; shutting down");
}
