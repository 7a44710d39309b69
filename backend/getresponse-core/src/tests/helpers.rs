// Test transports for driving the client without a network

use crate::error::GetResponseError;
use crate::transport::{Transport, TransportRequest, TransportResponse};

use std::future::pending;
use std::sync::{Arc, Mutex};

/// Answers every request with the same canned response and remembers what it saw.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    response: TransportResponse,
    seen: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: TransportResponse::new(status, body.as_bytes().to_vec()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, GetResponseError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Never answers.
#[derive(Debug, Clone, Default)]
pub struct StalledTransport;

impl Transport for StalledTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, GetResponseError> {
        pending().await
    }
}
