use std::fmt;

/// Touch lifecycle phase as reported by the platform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    /// Every phase, in listener registration order.
    pub const ALL: [TouchPhase; 4] = [
        TouchPhase::Start,
        TouchPhase::Move,
        TouchPhase::End,
        TouchPhase::Cancel,
    ];

    /// DOM event type name for this phase.
    pub const fn event_type(self) -> &'static str {
        match self {
            TouchPhase::Start => "touchstart",
            TouchPhase::Move => "touchmove",
            TouchPhase::End => "touchend",
            TouchPhase::Cancel => "touchcancel",
        }
    }

    /// Parses a DOM event type name. Returns `None` for non-touch types.
    pub fn from_event_type(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.event_type() == name)
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// Canonical pointer event kind the downstream module consumes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerKind {
    PressStart,
    Move,
    PressEnd,
}

impl PointerKind {
    /// DOM event type name of the mouse event this kind is emitted as.
    pub const fn event_type(self) -> &'static str {
        match self {
            PointerKind::PressStart => "mousedown",
            PointerKind::Move => "mousemove",
            PointerKind::PressEnd => "mouseup",
        }
    }
}

/// Mouse button identifier. Synthetic events only ever press the primary one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
}

impl MouseButton {
    /// `MouseEvent.button` value.
    pub const fn dom_button(self) -> i16 {
        match self {
            MouseButton::Left => 0,
        }
    }
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// A position in CSS pixels, exactly as the platform reported it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One finger's data within a touch notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPoint<T> {
    pub screen: Position,
    pub client: Position,
    /// Element that received the touch.
    pub target: T,
}

/// Mouse-shaped event mirroring the first contact point of a touch.
///
/// Only [`make_synthetic_pointer_event`](super::make_synthetic_pointer_event)
/// builds one, so the left-button / no-modifier / bubbling / cancelable
/// invariants hold for every value.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticPointerEvent<T> {
    pub(crate) kind: PointerKind,
    pub(crate) screen: Position,
    pub(crate) client: Position,
    pub(crate) target: T,
}

impl<T> SyntheticPointerEvent<T> {
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    pub fn screen(&self) -> Position {
        self.screen
    }

    pub fn client(&self) -> Position {
        self.client
    }

    /// Element the event is dispatched on.
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn button(&self) -> MouseButton {
        MouseButton::Left
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::NONE
    }

    pub fn bubbles(&self) -> bool {
        true
    }

    pub fn cancelable(&self) -> bool {
        true
    }

    /// `UIEvent.detail` (click count).
    pub fn detail(&self) -> i32 {
        1
    }
}
