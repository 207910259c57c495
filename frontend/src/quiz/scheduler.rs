use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Single-slot timer used by the quiz session. Scheduling replaces whatever
/// was pending, and cancelling guarantees the pending task never runs.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    fn cancel(&self);
}

/// Browser scheduler backed by `setTimeout`.
#[derive(Default)]
pub struct TimeoutScheduler {
    pending: RefCell<Option<Timeout>>,
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, move || task());
        // Dropping the previous handle clears it.
        *self.pending.borrow_mut() = Some(timeout);
    }

    fn cancel(&self) {
        if let Some(timeout) = self.pending.borrow_mut().take() {
            drop(timeout);
        }
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
