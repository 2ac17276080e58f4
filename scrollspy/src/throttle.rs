/// Coalesces bursts of events into a single trailing invocation.
///
/// Each `push` replaces the pending value and restarts the window, so the value handed out by
/// `poll` is always the last one received. At most one value is produced per window.
///
/// The throttle holds no clock: the adapter passes `now_ms` from its own timer source.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    wait_ms: u64,
    pending: Option<T>,
    due_ms: Option<u64>,
}

impl<T> Throttle<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
            due_ms: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Changes the window length. A pending value keeps its current deadline.
    pub fn set_wait_ms(&mut self, wait_ms: u64) {
        self.wait_ms = wait_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The time at which the pending value becomes available.
    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some(value);
        self.due_ms = Some(now_ms.saturating_add(self.wait_ms));
    }

    /// Takes the pending value once its window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.due_ms?;
        if now_ms < due {
            return None;
        }
        self.due_ms = None;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.due_ms = None;
    }
}

/// A one-shot deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    due_ms: Option<u64>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            due_ms: Some(now_ms.saturating_add(delay_ms)),
        }
    }

    /// Arms the timer, replacing any previous deadline.
    pub fn start(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }
}
