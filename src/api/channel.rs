//! UI-side handle to the API worker

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::worker::{ApiRequest, ApiResponse};

/// Message used when no worker is attached or it has gone away
pub const WORKER_UNAVAILABLE_MESSAGE: &str = "Network worker is not running";

/// Request/response channels plus the id of the query currently in flight
#[derive(Debug, Default)]
pub struct ApiChannel {
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    next_request_id: u64,
    in_flight: Option<u64>,
}

/// Result of draining the response channel
#[derive(Debug, Default)]
pub struct Drained {
    pub responses: Vec<ApiResponse>,
    pub disconnected: bool,
}

impl ApiChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Queue a query and mark it as the one in flight
    pub fn send_query(&mut self, query: String) -> Result<u64, String> {
        let request_tx = self
            .request_tx
            .as_ref()
            .ok_or_else(|| WORKER_UNAVAILABLE_MESSAGE.to_string())?;

        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;

        request_tx
            .send(ApiRequest::Query { query, request_id })
            .map_err(|_| WORKER_UNAVAILABLE_MESSAGE.to_string())?;

        self.in_flight = Some(request_id);
        Ok(request_id)
    }

    pub fn send_health(&self) -> Result<(), String> {
        self.request_tx
            .as_ref()
            .ok_or_else(|| WORKER_UNAVAILABLE_MESSAGE.to_string())?
            .send(ApiRequest::Health)
            .map_err(|_| WORKER_UNAVAILABLE_MESSAGE.to_string())
    }

    /// Clear the in-flight marker if it matches; returns whether it matched
    pub fn complete(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn abandon_in_flight(&mut self) {
        self.in_flight = None;
    }

    /// Non-blocking read of everything the worker has sent so far
    pub fn drain(&mut self) -> Drained {
        let mut drained = Drained::default();

        let Some(rx) = &self.response_rx else {
            return drained;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => drained.responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    drained.disconnected = true;
                    break;
                }
            }
        }

        if drained.disconnected {
            self.request_tx = None;
            self.response_rx = None;
        }

        drained
    }
}
