//! # Timers
//!
//! [`Delay`] abstracts "wait this long" so the debouncer and the success banner work the
//! same under `gloo-timers` in the browser and under tokio's paused clock in tests.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
