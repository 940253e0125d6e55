//! Retained results for one probe session.
//!
//! All mutable state lives in a single-owner `Session`; commands thread it
//! through explicitly rather than touching anything ambient. Several calls
//! may be pending at once; each is keyed by a request id derived from the
//! method name plus a running count, which routes the eventual response to
//! the right slot.

pub mod display;

pub use display::DisplayState;

use crate::rpc::types::RpcResponse;
use chrono::{DateTime, Utc};
use log::warn;

/// Lifecycle of one retained call
#[derive(Debug, Clone)]
pub enum SlotState {
    /// Issued but not yet resolved
    Pending,
    /// Resolved - success and error responses land here alike
    Done {
        response: RpcResponse,
        received_at: DateTime<Utc>,
    },
}

/// One retained RPC call, pending or completed
#[derive(Debug, Clone)]
pub struct ResultSlot {
    pub id: String,
    pub method: String,
    pub state: SlotState,
}

impl ResultSlot {
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SlotState::Pending)
    }

    /// The response, once resolved
    pub fn response(&self) -> Option<&RpcResponse> {
        match &self.state {
            SlotState::Done { response, .. } => Some(response),
            SlotState::Pending => None,
        }
    }

    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            SlotState::Done { received_at, .. } => Some(*received_at),
            SlotState::Pending => None,
        }
    }
}

/// Ordered collection of retained results
#[derive(Debug, Default)]
pub struct Session {
    slots: Vec<ResultSlot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight request and return its id
    ///
    /// Ids are `"{method}-{n}"` where `n` counts retained results at call
    /// time, so repeated calls to the same method stay distinguishable.
    pub fn begin_request(&mut self, method: &str) -> String {
        let id = format!("{}-{}", method, self.slots.len() + 1);
        self.slots.push(ResultSlot {
            id: id.clone(),
            method: method.to_string(),
            state: SlotState::Pending,
        });
        id
    }

    /// Route a resolved response to its slot
    ///
    /// A response for an id that was removed in the meantime is dropped
    /// with a log line; the result had already been dismissed.
    pub fn complete_request(&mut self, id: &str, response: RpcResponse) {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.state = SlotState::Done {
                    response,
                    received_at: Utc::now(),
                };
            }
            None => warn!("No result slot for request {}", id),
        }
    }

    /// Dismiss a result; returns false when the id is unknown
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&ResultSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn slots(&self) -> &[ResultSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
