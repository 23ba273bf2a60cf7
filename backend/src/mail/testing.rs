//! Scriptable `MailTransport` for handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{MailError, MailTransport, OutgoingMessage};

/// Answers with preset results and records every call.
///
/// Messages are recorded when `send` is called, whether or not the scripted
/// result is a failure.
pub struct RecordingTransport {
    verify_result: Result<(), MailError>,
    send_result: Result<String, MailError>,
    verify_calls: AtomicUsize,
    sent: Mutex<Vec<OutgoingMessage>>,
}

impl RecordingTransport {
    fn scripted(verify_result: Result<(), MailError>, send_result: Result<String, MailError>) -> Self {
        Self {
            verify_result,
            send_result,
            verify_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn healthy() -> Self {
        Self::scripted(Ok(()), Ok("250 2.0.0 OK queued".to_string()))
    }

    pub fn unreachable(reason: &str) -> Self {
        Self::scripted(
            Err(MailError::Connectivity(reason.to_string())),
            Ok("250 2.0.0 OK queued".to_string()),
        )
    }

    pub fn failing_send(reason: &str) -> Self {
        Self::scripted(Ok(()), Err(MailError::Delivery(reason.to_string())))
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn verify_connectivity(&self) -> Result<(), MailError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.verify_result.clone()
    }

    async fn send(&self, message: OutgoingMessage) -> Result<String, MailError> {
        self.sent.lock().unwrap().push(message);
        self.send_result.clone()
    }
}
