use crate::domain::gateway::GatewayRequest;
use crate::domain::ports::GatewayTransport;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// An offline transport that answers from a queue of canned response bodies.
///
/// Every request it receives is recorded so callers can inspect exactly what
/// would have gone over the wire. Clones share the queue and the record.
#[derive(Default, Clone)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<GatewayRequest>>>,
}

impl ScriptedTransport {
    /// Creates a transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response body.
    pub async fn push_response(&self, body: impl Into<String>) {
        self.responses.lock().await.push_back(body.into());
    }

    /// Queues an approved response carrying `trans_id`.
    pub async fn push_approved(&self, trans_id: &str) {
        let body = response_line("1", "1", "This transaction has been approved.", trans_id);
        self.push_response(body).await;
    }

    /// Queues a declined response.
    pub async fn push_declined(&self, trans_id: &str) {
        let body = response_line("2", "2", "This transaction has been declined.", trans_id);
        self.push_response(body).await;
    }

    /// Every request sent so far, oldest first.
    pub async fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().await.clone()
    }
}

/// Builds a 40-field pipe-delimited response line.
pub fn response_line(
    response_code: &str,
    reason_code: &str,
    reason_text: &str,
    trans_id: &str,
) -> String {
    let mut fields = vec![""; 40];
    fields[0] = response_code;
    fields[1] = "1";
    fields[2] = reason_code;
    fields[3] = reason_text;
    fields[4] = if response_code == "1" { "000000" } else { "" };
    fields[5] = "P";
    fields[6] = trans_id;
    fields[39] = "M";
    fields.join("|")
}

#[async_trait]
impl GatewayTransport for ScriptedTransport {
    async fn send(&self, request: &GatewayRequest) -> Result<String> {
        self.requests.lock().await.push(request.clone());
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| PaymentError::Transport("no scripted response queued".to_string()))
    }
}
