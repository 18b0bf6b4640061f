use super::types::{ContactPoint, PointerKind, SyntheticPointerEvent, TouchPhase};

/// Touch phase to pointer kind. `None` means the notification is dropped.
///
/// A cancelled gesture produces no synthetic release: the pointer vocabulary
/// has no physical action matching "cancel".
pub const TOUCH_TO_POINTER: [(TouchPhase, Option<PointerKind>); 4] = [
    (TouchPhase::Start, Some(PointerKind::PressStart)),
    (TouchPhase::Move, Some(PointerKind::Move)),
    (TouchPhase::End, Some(PointerKind::PressEnd)),
    (TouchPhase::Cancel, None),
];

/// Looks up the pointer kind a touch phase translates to.
pub fn pointer_kind_for(phase: TouchPhase) -> Option<PointerKind> {
    TOUCH_TO_POINTER
        .iter()
        .find(|(p, _)| *p == phase)
        .and_then(|(_, kind)| *kind)
}

/// Builds the synthetic pointer event for one contact point.
///
/// Coordinates are copied verbatim: no scaling, no DPI adjustment.
pub fn make_synthetic_pointer_event<T: Clone>(
    kind: PointerKind,
    point: &ContactPoint<T>,
    target: &T,
) -> SyntheticPointerEvent<T> {
    SyntheticPointerEvent {
        kind,
        screen: point.screen,
        client: point.client,
        target: target.clone(),
    }
}
