use std::rc::Rc;

use crate::error::ShimError;

use super::mapping::{make_synthetic_pointer_event, pointer_kind_for};
use super::types::{ContactPoint, PointerKind, SyntheticPointerEvent, TouchPhase};

/// A touch notification as delivered by the platform to a listener.
pub trait TouchNotification {
    type Target: Clone;

    /// Lifecycle phase, or `None` if the notification is not a touch event.
    fn phase(&self) -> Option<TouchPhase>;

    /// First contact point, if the notification carries any.
    fn first_contact(&self) -> Option<ContactPoint<Self::Target>>;

    /// Suppresses the platform's default handling (including its own
    /// compatibility mouse events).
    fn prevent_default(&self);
}

/// Synchronously dispatches synthetic pointer events onto their target.
pub trait PointerSink<T> {
    fn dispatch(&self, event: &SyntheticPointerEvent<T>) -> Result<(), ShimError>;
}

/// Listener callback shared across all four touch registrations.
pub type TouchHandler<N> = Rc<dyn Fn(&N)>;

/// The root element touch listeners are registered on (the document in a browser).
pub trait EventRoot: 'static {
    type Target: Clone;
    type Notification: TouchNotification<Target = Self::Target> + 'static;
    type Sink: PointerSink<Self::Target> + 'static;
    /// Handle that keeps one registration alive and allows removing it.
    type Listener;

    fn sink(&self) -> Self::Sink;

    fn add_touch_listener(
        &self,
        phase: TouchPhase,
        capture: bool,
        handler: TouchHandler<Self::Notification>,
    ) -> Result<Self::Listener, ShimError>;

    fn remove_touch_listener(&self, listener: Self::Listener);
}

/// What `normalize` did with one notification.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Normalized {
    /// A synthetic event of this kind was dispatched.
    Dispatched(PointerKind),
    /// Translation succeeded but the platform rejected the dispatch.
    DispatchFailed(PointerKind),
    /// The phase has no pointer counterpart (cancel).
    Dropped,
    /// The notification carried no contact points.
    Empty,
    /// Not a touch notification; left untouched.
    Unrecognized,
}

/// Translates one touch notification and suppresses its default action.
///
/// The synthetic event (if any) is dispatched before `prevent_default` runs,
/// within the same call. Default handling is suppressed for every touch phase,
/// including cancel and notifications without contact points.
pub fn normalize<N, S>(notification: &N, sink: &S) -> Normalized
where
    N: TouchNotification,
    S: PointerSink<N::Target> + ?Sized,
{
    let Some(phase) = notification.phase() else {
        return Normalized::Unrecognized;
    };

    let outcome = match pointer_kind_for(phase) {
        None => Normalized::Dropped,
        Some(kind) => match notification.first_contact() {
            None => {
                log::debug!("{phase} without contact points ignored");
                Normalized::Empty
            }
            Some(point) => {
                let event = make_synthetic_pointer_event(kind, &point, &point.target);
                match sink.dispatch(&event) {
                    Ok(()) => Normalized::Dispatched(kind),
                    Err(e) => {
                        log::warn!("{phase}: {e}");
                        Normalized::DispatchFailed(kind)
                    }
                }
            }
        },
    };

    notification.prevent_default();
    outcome
}

/// Touch-to-pointer bridge bound to one root element.
///
/// Nothing is registered until [`attach`](Self::attach) is called; the caller
/// owns the lifecycle and may [`detach`](Self::detach) again.
pub struct InputBridge<R: EventRoot> {
    root: R,
    capture: bool,
    listeners: Vec<R::Listener>,
}

impl<R: EventRoot> InputBridge<R> {
    /// Creates a bridge listening in capture (interception) mode.
    pub fn new(root: R) -> Self {
        Self::with_capture(root, true)
    }

    pub fn with_capture(root: R, capture: bool) -> Self {
        Self {
            root,
            capture,
            listeners: Vec::new(),
        }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Registers one listener per touch phase on the root.
    ///
    /// Either all four registrations succeed or none remain.
    pub fn attach(&mut self) -> Result<(), ShimError> {
        if self.is_attached() {
            return Err(ShimError::AlreadyAttached);
        }

        let sink = self.root.sink();
        let handler: TouchHandler<R::Notification> = Rc::new(move |n: &R::Notification| {
            let outcome = normalize(n, &sink);
            log::trace!("touch normalized: {outcome:?}");
        });

        let mut listeners = Vec::with_capacity(TouchPhase::ALL.len());
        for phase in TouchPhase::ALL {
            match self.root.add_touch_listener(phase, self.capture, handler.clone()) {
                Ok(listener) => listeners.push(listener),
                Err(e) => {
                    for listener in listeners {
                        self.root.remove_touch_listener(listener);
                    }
                    return Err(e);
                }
            }
        }

        self.listeners = listeners;
        log::debug!("input bridge attached (capture: {})", self.capture);
        Ok(())
    }

    /// Removes every registration made by `attach`. No-op when detached.
    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            self.root.remove_touch_listener(listener);
        }
        log::debug!("input bridge detached");
    }
}
