use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{self, Either};

/// Timer used by the readiness watchdog.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Whether [`sleep`](Self::sleep) can ever complete.
    fn elapses(&self) -> bool {
        true
    }
}

/// A delay that never elapses.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        future::pending()
    }

    fn elapses(&self) -> bool {
        false
    }
}

/// Browser timer (`setTimeout`) backed delay.
#[cfg(feature = "web")]
#[derive(Debug, Copy, Clone, Default)]
pub struct TimerDelay;

#[cfg(feature = "web")]
impl Delay for TimerDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// Awaits `ready`, warning once if it is still pending after `timeout`.
///
/// The deadline is diagnostic only: waiting continues past it.
/// Returns the readiness output and whether the deadline passed first.
pub(crate) async fn await_with_watchdog<F, D>(
    ready: F,
    delay: &D,
    timeout: Option<Duration>,
) -> (F::Output, bool)
where
    F: Future,
    D: Delay,
{
    let Some(timeout) = timeout else {
        return (ready.await, false);
    };

    let ready = pin!(ready);
    let deadline = pin!(delay.sleep(timeout));

    match future::select(ready, deadline).await {
        Either::Left((out, _)) => (out, false),
        Either::Right(((), ready)) => {
            log::warn!(
                "renderer module not ready after {:.1}s; still waiting",
                timeout.as_secs_f32()
            );
            (ready.await, true)
        }
    }
}
