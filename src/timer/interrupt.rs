//! Ctrl-C handling for the timer loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::thread;
use std::time::Duration;

use crate::error::AppError;
use crate::render::interrupted_message;

/// Shared interruption state between the signal handler and the loop
#[derive(Debug, Clone, Default)]
pub(crate) struct Interrupt {
    requested: Arc<AtomicBool>,
    /// Set while blocked on the post-completion prompt. The count is already
    /// persisted then, so the handler may end the process itself.
    at_prompt: Arc<AtomicBool>,
    saved_count: Arc<AtomicI64>,
}

impl Interrupt {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl-C handler. Call at most once.
    pub(crate) fn install(&self) -> Result<(), AppError> {
        let this = self.clone();
        ctrlc::set_handler(move || {
            if this.at_prompt.load(Ordering::SeqCst) {
                let count = this.saved_count.load(Ordering::SeqCst);
                println!("\n\n{}\n", interrupted_message(count));
                std::process::exit(0);
            }
            this.request();
        })?;
        Ok(())
    }

    pub(crate) fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    pub(crate) fn enter_prompt(&self, count: i64) {
        self.saved_count.store(count, Ordering::SeqCst);
        self.at_prompt.store(true, Ordering::SeqCst);
    }

    pub(crate) fn leave_prompt(&self) {
        self.at_prompt.store(false, Ordering::SeqCst);
    }
}

/// Source of the one-second tick
pub(crate) trait Clock {
    /// Wait for `duration`, returning early if `interrupt` fires
    fn sleep(&mut self, duration: Duration, interrupt: &Interrupt);
}

/// Wall-clock sleeping in short slices so Ctrl-C is noticed promptly
pub(crate) struct SystemClock;

const SLICE: Duration = Duration::from_millis(50);

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration, interrupt: &Interrupt) {
        let mut left = duration;
        while !left.is_zero() && !interrupt.is_requested() {
            let step = left.min(SLICE);
            thread::sleep(step);
            left -= step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn request_is_visible_through_clones() {
        let a = Interrupt::new();
        let b = a.clone();
        assert!(!b.is_requested());
        a.request();
        assert!(b.is_requested());
    }

    #[test]
    fn system_clock_returns_early_when_interrupted() {
        let interrupt = Interrupt::new();
        interrupt.request();
        let start = Instant::now();
        SystemClock.sleep(Duration::from_secs(5), &interrupt);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn system_clock_sleeps_requested_time() {
        let start = Instant::now();
        SystemClock.sleep(Duration::from_millis(120), &Interrupt::new());
        assert!(start.elapsed() >= Duration::from_millis(120));
    }
}
