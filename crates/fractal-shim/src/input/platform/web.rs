use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, EventTarget, MouseEvent, MouseEventInit, TouchEvent, Window,
};

use crate::error::ShimError;
use crate::input::{
    ContactPoint, EventRoot, PointerSink, Position, SyntheticPointerEvent, TouchHandler,
    TouchNotification, TouchPhase,
};

/// The browser document as an event root.
#[derive(Clone)]
pub struct DocumentRoot {
    window: Window,
    document: Document,
}

impl DocumentRoot {
    /// Binds to the global `window.document`.
    pub fn from_window() -> Result<Self, ShimError> {
        let window = web_sys::window().ok_or(ShimError::NoWindow)?;
        let document = window.document().ok_or(ShimError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A DOM `TouchEvent` delivered to one of the bridge's listeners.
pub struct WebTouch(TouchEvent);

impl TouchNotification for WebTouch {
    type Target = EventTarget;

    fn phase(&self) -> Option<TouchPhase> {
        TouchPhase::from_event_type(&self.0.type_())
    }

    fn first_contact(&self) -> Option<ContactPoint<EventTarget>> {
        let touch = self.0.changed_touches().get(0)?;
        let target = touch.target()?;
        Some(ContactPoint {
            screen: Position::new(f64::from(touch.screen_x()), f64::from(touch.screen_y())),
            client: Position::new(f64::from(touch.client_x()), f64::from(touch.client_y())),
            target,
        })
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Dispatches synthetic events as DOM `MouseEvent`s.
#[derive(Clone)]
pub struct MouseEventSink {
    window: Window,
}

impl PointerSink<EventTarget> for MouseEventSink {
    fn dispatch(&self, event: &SyntheticPointerEvent<EventTarget>) -> Result<(), ShimError> {
        let modifiers = event.modifiers();

        let init = MouseEventInit::new();
        init.set_bubbles(event.bubbles());
        init.set_cancelable(event.cancelable());
        init.set_view(Some(&self.window));
        init.set_detail(event.detail());
        // Touch coordinates arrive as integers, so the round trip is exact.
        init.set_screen_x(event.screen().x as i32);
        init.set_screen_y(event.screen().y as i32);
        init.set_client_x(event.client().x as i32);
        init.set_client_y(event.client().y as i32);
        init.set_ctrl_key(modifiers.ctrl);
        init.set_alt_key(modifiers.alt);
        init.set_shift_key(modifiers.shift);
        init.set_meta_key(modifiers.meta);
        init.set_button(event.button().dom_button());
        init.set_related_target(None);

        let mouse = MouseEvent::new_with_mouse_event_init_dict(event.kind().event_type(), &init)
            .map_err(|e| ShimError::Dispatch(format!("{e:?}")))?;

        event
            .target()
            .dispatch_event(&mouse)
            .map_err(|e| ShimError::Dispatch(format!("{e:?}")))?;

        Ok(())
    }
}

/// A live document listener. Dropping it invalidates the JS callback, so
/// keep it for as long as the registration must stay active.
pub struct WebListener {
    phase: TouchPhase,
    capture: bool,
    closure: Closure<dyn FnMut(TouchEvent)>,
}

impl EventRoot for DocumentRoot {
    type Target = EventTarget;
    type Notification = WebTouch;
    type Sink = MouseEventSink;
    type Listener = WebListener;

    fn sink(&self) -> MouseEventSink {
        MouseEventSink {
            window: self.window.clone(),
        }
    }

    fn add_touch_listener(
        &self,
        phase: TouchPhase,
        capture: bool,
        handler: TouchHandler<WebTouch>,
    ) -> Result<WebListener, ShimError> {
        let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            handler(&WebTouch(ev));
        });

        // Document-level touch listeners default to passive in Chromium,
        // which silently ignores prevent_default.
        let options = AddEventListenerOptions::new();
        options.set_capture(capture);
        options.set_passive(false);

        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                phase.event_type(),
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| ShimError::Listener {
                phase,
                message: format!("{e:?}"),
            })?;

        Ok(WebListener {
            phase,
            capture,
            closure,
        })
    }

    fn remove_touch_listener(&self, listener: WebListener) {
        if let Err(e) = self.document.remove_event_listener_with_callback_and_bool(
            listener.phase.event_type(),
            listener.closure.as_ref().unchecked_ref(),
            listener.capture,
        ) {
            log::warn!("failed to remove {} listener: {e:?}", listener.phase);
        }
    }
}
