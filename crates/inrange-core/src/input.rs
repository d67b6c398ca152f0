use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

/// A mouse, pen or touch event in client (viewport) coordinates.
///
/// `touches` holds every active touch point for touch events, first finger
/// first. Mouse and pen events leave it empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub touches: SmallVec<[Vec2; 2]>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, event: PointerEventKind, position: Vec2) -> Self {
        let touches = if kind == PointerKind::Touch {
            SmallVec::from_elem(position, 1)
        } else {
            SmallVec::new()
        };
        Self {
            kind,
            event,
            position,
            touches,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn mouse(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Mouse, event, Vec2 { x, y })
    }

    pub fn touch(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Touch, event, Vec2 { x, y })
    }

    pub fn with_touches(mut self, touches: impl IntoIterator<Item = Vec2>) -> Self {
        self.touches = touches.into_iter().collect();
        self
    }

    /// Horizontal client coordinate: the first touch point for touch
    /// events, the pointer position otherwise.
    pub fn client_x(&self) -> f32 {
        self.touches
            .first()
            .map(|t| t.x)
            .unwrap_or(self.position.x)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
