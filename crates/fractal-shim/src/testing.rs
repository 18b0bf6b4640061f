//! In-memory event root used by unit tests.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::bootstrap::{Delay, ReadyTrigger};
use crate::error::ShimError;
use crate::input::{
    ContactPoint, EventRoot, PointerSink, Position, SyntheticPointerEvent,
    TouchHandler, TouchNotification, TouchPhase,
};

pub(crate) type Element = &'static str;

/// Side effects in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Journal {
    Dispatch(&'static str),
    Prevent(&'static str),
}

struct Registration {
    id: u32,
    phase: TouchPhase,
    capture: bool,
    handler: TouchHandler<FakeTouch>,
}

#[derive(Default)]
struct Inner {
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u32>,
    dispatched: RefCell<Vec<SyntheticPointerEvent<Element>>>,
    journal: RefCell<Vec<Journal>>,
    refuse: Cell<Option<TouchPhase>>,
    fail_dispatch: Cell<bool>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeRoot {
    inner: Rc<Inner>,
}

impl FakeRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes registration of `phase` fail.
    pub fn refuse(&self, phase: TouchPhase) {
        self.inner.refuse.set(Some(phase));
    }

    pub fn fail_dispatch(&self) {
        self.inner.fail_dispatch.set(true);
    }

    pub fn registered_phases(&self) -> Vec<TouchPhase> {
        self.inner.registrations.borrow().iter().map(|r| r.phase).collect()
    }

    pub fn all_capturing(&self) -> bool {
        let regs = self.inner.registrations.borrow();
        !regs.is_empty() && regs.iter().all(|r| r.capture)
    }

    /// Builds a notification; contacts are `(target, screen x, screen y, client x, client y)`.
    pub fn touch(&self, phase: TouchPhase, contacts: &[(Element, f64, f64, f64, f64)]) -> FakeTouch {
        FakeTouch {
            raw: RawTouchEvent {
                phase,
                contacts: contacts
                    .iter()
                    .map(|&(target, sx, sy, cx, cy)| ContactPoint {
                        screen: Position::new(sx, sy),
                        client: Position::new(cx, cy),
                        target,
                    })
                    .collect(),
            },
            foreign: false,
            prevented: Cell::new(false),
            inner: Rc::clone(&self.inner),
        }
    }

    /// A notification whose type is not a touch type.
    pub fn foreign_event(&self) -> FakeTouch {
        FakeTouch {
            raw: RawTouchEvent {
                phase: TouchPhase::Start,
                contacts: Vec::new(),
            },
            foreign: true,
            prevented: Cell::new(false),
            inner: Rc::clone(&self.inner),
        }
    }

    /// Delivers `touch` to every listener registered for its phase.
    pub fn fire(&self, touch: &FakeTouch) {
        let handlers: Vec<TouchHandler<FakeTouch>> = self
            .inner
            .registrations
            .borrow()
            .iter()
            .filter(|r| touch.phase() == Some(r.phase))
            .map(|r| Rc::clone(&r.handler))
            .collect();

        for handler in handlers {
            handler(touch);
        }
    }

    pub fn dispatched(&self) -> Vec<SyntheticPointerEvent<Element>> {
        self.inner.dispatched.borrow().clone()
    }

    pub fn journal(&self) -> Vec<Journal> {
        self.inner.journal.borrow().clone()
    }

    pub fn clear(&self) {
        self.inner.dispatched.borrow_mut().clear();
        self.inner.journal.borrow_mut().clear();
    }
}

impl PointerSink<Element> for FakeRoot {
    fn dispatch(&self, event: &SyntheticPointerEvent<Element>) -> Result<(), ShimError> {
        if self.inner.fail_dispatch.get() {
            return Err(ShimError::Dispatch("target detached".into()));
        }
        self.inner
            .journal
            .borrow_mut()
            .push(Journal::Dispatch(event.kind().event_type()));
        self.inner.dispatched.borrow_mut().push(event.clone());
        Ok(())
    }
}

impl EventRoot for FakeRoot {
    type Target = Element;
    type Notification = FakeTouch;
    type Sink = FakeRoot;
    type Listener = u32;

    fn sink(&self) -> Self::Sink {
        self.clone()
    }

    fn add_touch_listener(
        &self,
        phase: TouchPhase,
        capture: bool,
        handler: TouchHandler<FakeTouch>,
    ) -> Result<u32, ShimError> {
        if self.inner.refuse.get() == Some(phase) {
            return Err(ShimError::Listener { phase, message: "refused".into() });
        }
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .registrations
            .borrow_mut()
            .push(Registration { id, phase, capture, handler });
        Ok(id)
    }

    fn remove_touch_listener(&self, listener: u32) {
        self.inner.registrations.borrow_mut().retain(|r| r.id != listener);
    }
}

/// A touch notification with all of its contact points. Only the first
/// one is ever read.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawTouchEvent<T> {
    pub phase: TouchPhase,
    pub contacts: Vec<ContactPoint<T>>,
}

pub(crate) struct FakeTouch {
    raw: RawTouchEvent<Element>,
    /// Carries a non-touch event type.
    foreign: bool,
    prevented: Cell<bool>,
    inner: Rc<Inner>,
}

impl FakeTouch {
    pub fn prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl TouchNotification for FakeTouch {
    type Target = Element;

    fn phase(&self) -> Option<TouchPhase> {
        (!self.foreign).then_some(self.raw.phase)
    }

    fn first_contact(&self) -> Option<ContactPoint<Element>> {
        self.raw.contacts.first().cloned()
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
        if let Some(phase) = self.phase() {
            self.inner
                .journal
                .borrow_mut()
                .push(Journal::Prevent(phase.event_type()));
        }
    }
}

/// Timer that elapses on first poll and fires `trigger` as it does, so the
/// watchdog deadline always wins and readiness follows right after.
pub(crate) struct LateReady(pub ReadyTrigger);

impl Delay for LateReady {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        let trigger = self.0.clone();
        async move {
            trigger.fire();
        }
    }
}
