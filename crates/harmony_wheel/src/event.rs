use crate::geometry::Point;

/// Pointer input the picker responds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer (finger or primary button) went down.
    Pressed { position: Point },
    /// Pointer moved while down.
    Moved { position: Point },
    /// Pointer lifted.
    Released { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Pressed { position }
            | PointerEvent::Moved { position }
            | PointerEvent::Released { position } => *position,
        }
    }

    /// Whether this event can update the selection (press or drag).
    pub fn selects(&self) -> bool {
        matches!(
            self,
            PointerEvent::Pressed { .. } | PointerEvent::Moved { .. }
        )
    }
}
