//! Per-control busy-state tracking.
//!
//! Each network-triggering control owns one [`ActionId`]. While an action is
//! busy its control cannot be re-triggered, so at most one request per
//! control is ever in flight. The visible "Processing..." label is *derived*
//! from this state by the view layer rather than written into the control,
//! which is what guarantees the original label reappears after release.
//!
//! Release discipline: the request dispatcher always delivers a completion
//! message carrying the `Result`, and the single completion handler calls
//! [`BusyState::finish`] before inspecting the payload. Cleanup is therefore
//! structural rather than repeated per call site.

use serde::Serialize;

use crate::error::CoreError;

/// Identity of one trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionId {
    /// "Scan Now" on the URL panel
    ScanUrl,
    /// "Scan Text" on the phishing panel
    ScanText,
    /// "Search Database" on the breach panel
    SearchBreach,
    /// Send control on the assistant panel
    SendChat,
}

impl ActionId {
    /// Idle label of the owning control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActionId::ScanUrl => "Scan Now",
            ActionId::ScanText => "Scan Text",
            ActionId::SearchBreach => "Search Database",
            ActionId::SendChat => "Send",
        }
    }
}

/// Tracks which controls currently have a request in flight.
#[derive(Debug, Default)]
pub struct BusyState {
    in_flight: Vec<ActionId>,
}

impl BusyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `action` busy.
    ///
    /// # Errors
    /// [`CoreError::Busy`] if the control already has a request in flight;
    /// the caller must not issue a second request.
    pub fn begin(&mut self, action: ActionId) -> Result<(), CoreError> {
        if self.is_busy(action) {
            log::debug!("action {action:?} already in flight, trigger ignored");
            return Err(CoreError::Busy(action));
        }
        self.in_flight.push(action);
        Ok(())
    }

    /// Restore `action` to idle. Safe to call when already idle.
    pub fn finish(&mut self, action: ActionId) {
        self.in_flight.retain(|a| *a != action);
    }

    #[must_use]
    pub fn is_busy(&self, action: ActionId) -> bool {
        self.in_flight.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_marks_busy() {
        let mut busy = BusyState::new();
        assert!(!busy.is_busy(ActionId::ScanUrl));
        busy.begin(ActionId::ScanUrl).unwrap();
        assert!(busy.is_busy(ActionId::ScanUrl));
    }

    #[test]
    fn double_begin_is_refused() {
        let mut busy = BusyState::new();
        busy.begin(ActionId::SearchBreach).unwrap();
        let second = busy.begin(ActionId::SearchBreach);
        assert!(matches!(second, Err(CoreError::Busy(ActionId::SearchBreach))));
    }

    #[test]
    fn finish_restores_idle() {
        let mut busy = BusyState::new();
        busy.begin(ActionId::SendChat).unwrap();
        busy.finish(ActionId::SendChat);
        assert!(!busy.is_busy(ActionId::SendChat));
        // A fresh trigger is accepted again.
        busy.begin(ActionId::SendChat).unwrap();
    }

    #[test]
    fn actions_are_independent() {
        let mut busy = BusyState::new();
        busy.begin(ActionId::ScanUrl).unwrap();
        // A busy URL scan does not block the phishing panel.
        busy.begin(ActionId::ScanText).unwrap();
        busy.finish(ActionId::ScanUrl);
        assert!(!busy.is_busy(ActionId::ScanUrl));
        assert!(busy.is_busy(ActionId::ScanText));
    }

    #[test]
    fn finish_when_idle_is_a_noop() {
        let mut busy = BusyState::new();
        busy.finish(ActionId::ScanText);
        assert!(!busy.is_busy(ActionId::ScanText));
    }
}
