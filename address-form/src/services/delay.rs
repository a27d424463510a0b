//! Browser timers

use std::time::Duration;

use async_trait::async_trait;
use lib_core::delay::Delay;

/// [`Delay`] backed by `setTimeout` through `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
