//! Per-result display state: hex/readable mode and copy acknowledgment.

use crate::inspect::DisplayMode;
use crate::utils::config::COPY_FLASH_DURATION;
use std::time::Instant;

/// Display state for one result card
///
/// At most one field carries a "copied" acknowledgment at a time. The
/// acknowledgment expires a fixed interval after the last copy; expiry is
/// checked lazily on read, so no timer has to run anywhere.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub mode: DisplayMode,
    copied: Option<(String, Instant)>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Record that `field_id` was just copied; restarts the flash interval
    pub fn mark_copied(&mut self, field_id: impl Into<String>) {
        self.copied = Some((field_id.into(), Instant::now()));
    }

    /// Field currently acknowledged as copied, if the flash has not expired
    pub fn copied_field(&self) -> Option<&str> {
        match &self.copied {
            Some((field, at)) if at.elapsed() < COPY_FLASH_DURATION => Some(field),
            _ => None,
        }
    }

    pub fn is_copied(&self, field_id: &str) -> bool {
        self.copied_field() == Some(field_id)
    }
}
