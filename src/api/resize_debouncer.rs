use std::time::{Duration, Instant};

/// Trailing-edge debouncer for viewport resize signals.
///
/// Every signal cancels the pending deadline and reschedules it one quiet
/// window later; the pass fires once, for the last signal, when polled at or
/// after the deadline.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_window: Duration,
    deadline: Option<Instant>,
    coalesced_signals: u32,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            deadline: None,
            coalesced_signals: 0,
        }
    }

    #[must_use]
    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_window);
        self.coalesced_signals = self.coalesced_signals.saturating_add(1);
    }

    /// Returns `true` exactly once per burst, when `now` reached the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.coalesced_signals = 0;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Signals received since the last fired pass.
    #[must_use]
    pub fn coalesced_signals(&self) -> u32 {
        self.coalesced_signals
    }
}
