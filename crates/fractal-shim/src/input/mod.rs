//! Input subsystem.
//!
//! Translates platform touch notifications into mouse-shaped pointer events so
//! the renderer only ever handles one input vocabulary.
//! The core is platform-agnostic; `platform` holds the host adapters.

mod bridge;
mod mapping;
mod types;

pub mod platform;

pub use bridge::{
    normalize,
    EventRoot,
    InputBridge,
    Normalized,
    PointerSink,
    TouchHandler,
    TouchNotification,
};
pub use mapping::{make_synthetic_pointer_event, pointer_kind_for, TOUCH_TO_POINTER};
pub use types::{
    ContactPoint,
    Modifiers,
    MouseButton,
    PointerKind,
    Position,
    SyntheticPointerEvent,
    TouchPhase,
};
