//! Gesture tracking for drags that outlive the widget's hit region.
//!
//! A drag starts with a press on the widget but its moves and its release
//! can land anywhere, so for the length of the gesture the widget listens on
//! the `Document`. `GestureSubscription` owns that listener pair and removes
//! both listeners when dropped; `DragTracker` keeps the previous move so
//! each move can be reported against the one before it.

use inrange_core::{Document, DocumentEvent, Listener, ListenerKey, PointerEvent};

/// Live move/up listener pair on a document. Dropping it unsubscribes both.
pub struct GestureSubscription {
    document: Document,
    move_key: ListenerKey,
    up_key: ListenerKey,
}

impl std::fmt::Debug for GestureSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureSubscription")
            .field("move_key", &self.move_key)
            .field("up_key", &self.up_key)
            .finish()
    }
}

impl GestureSubscription {
    pub fn subscribe(document: &Document, on_move: Listener, on_up: Listener) -> Self {
        let move_key = document.add_listener(DocumentEvent::PointerMove, on_move);
        let up_key = document.add_listener(DocumentEvent::PointerUp, on_up);
        log::debug!("gesture: subscribed move={move_key:?} up={up_key:?}");
        Self {
            document: document.clone(),
            move_key,
            up_key,
        }
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        self.document.remove_listener(self.move_key);
        self.document.remove_listener(self.up_key);
        log::debug!(
            "gesture: released move={:?} up={:?}",
            self.move_key,
            self.up_key
        );
    }
}

/// Previous-event slot for one drag gesture.
#[derive(Debug, Default)]
pub struct DragTracker {
    previous: Option<PointerEvent>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Records `event` as the latest move and returns the one it replaces.
    pub fn advance(&mut self, event: &PointerEvent) -> Option<PointerEvent> {
        self.previous.replace(event.clone())
    }

    pub fn previous(&self) -> Option<&PointerEvent> {
        self.previous.as_ref()
    }
}
