use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Default)]
struct Slot {
    fired: Cell<bool>,
    wakers: RefCell<Vec<Waker>>,
}

/// Creates a one-shot readiness signal for driving test modules.
///
/// The trigger resolves every clone of the signal at most once. Dropping the
/// trigger without firing leaves the signal pending forever; there is no
/// cancellation.
pub fn ready_signal() -> (ReadyTrigger, ReadySignal) {
    let slot = Rc::new(Slot::default());
    (
        ReadyTrigger { slot: Rc::clone(&slot) },
        ReadySignal { slot },
    )
}

/// Firing side of [`ready_signal`].
#[derive(Clone)]
pub struct ReadyTrigger {
    slot: Rc<Slot>,
}

impl ReadyTrigger {
    /// Resolves the signal. Returns `false` (and does nothing) if it already fired.
    pub fn fire(&self) -> bool {
        if self.slot.fired.replace(true) {
            return false;
        }
        for waker in self.slot.wakers.borrow_mut().drain(..) {
            waker.wake();
        }
        true
    }
}

/// Awaitable side of [`ready_signal`].
#[derive(Clone)]
pub struct ReadySignal {
    slot: Rc<Slot>,
}

impl ReadySignal {
    pub fn is_ready(&self) -> bool {
        self.slot.fired.get()
    }
}

impl Future for ReadySignal {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.slot.fired.get() {
            return Poll::Ready(());
        }
        let mut wakers = self.slot.wakers.borrow_mut();
        if !wakers.iter().any(|w| w.will_wake(cx.waker())) {
            wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn pending_until_fired() {
        let (trigger, signal) = ready_signal();
        assert!(signal.clone().now_or_never().is_none());

        assert!(trigger.fire());
        assert!(signal.is_ready());
        assert_eq!(signal.now_or_never(), Some(()));
    }

    #[test]
    fn second_fire_is_noop() {
        let (trigger, signal) = ready_signal();
        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(!trigger.clone().fire());
        pollster::block_on(signal);
    }

    #[test]
    fn fire_wakes_a_suspended_waiter() {
        let (trigger, signal) = ready_signal();
        let mut waiter = Box::pin(signal);
        assert!(waiter.as_mut().now_or_never().is_none());

        trigger.fire();
        pollster::block_on(waiter);
    }

    #[test]
    fn dropped_trigger_never_resolves() {
        let (trigger, signal) = ready_signal();
        drop(trigger);
        assert!(signal.now_or_never().is_none());
    }
}
