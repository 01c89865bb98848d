/// A single cancellable one-shot timer, driven by host time in milliseconds.
///
/// Scheduling replaces any pending deadline, so at most one timer of a slot is ever live.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimerSlot {
    deadline_ms: Option<f64>,
}

impl TimerSlot {
    /// Arm the slot to fire `delay_ms` after `now_ms`, superseding any pending deadline.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms.max(0.0));
    }

    /// Disarm the slot. Returns whether a deadline was pending.
    pub fn clear(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Disarm and report `true` when the deadline has been reached at `now_ms`.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(at) if now_ms >= at => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/timer.rs"]
mod tests;
