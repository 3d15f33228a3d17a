use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `message` to the backend; the answer must come back tagged with `request_id`.
    SendQuestion { request_id: RequestId, message: String },
    /// Abort the in-flight request, if the engine still has it.
    CancelRequest { request_id: RequestId },
    /// Probe the backend once for reachability.
    CheckHealth,
}
