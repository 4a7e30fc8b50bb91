//! Delayed Callbacks
//!
//! Fire-once timers used to auto-hide the error banner.

use gloo_timers::callback::Timeout;

pub trait Timer: Send + Sync {
    /// Run `callback` once after `delay_ms`. No handle is kept, so it cannot be cancelled.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce() + Send>);
}

/// `setTimeout` in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce() + Send>) {
        Timeout::new(delay_ms, callback).forget();
    }
}
