//! # Document-level pointer listeners
//!
//! Widgets that track a gesture past their own bounds (a drag that leaves
//! the track, a release outside the window) listen on the `Document` rather
//! than on their own hit region. The host feeds every pointer event it sees
//! into `Document::dispatch`; listeners subscribed for the matching
//! `DocumentEvent` are called.
//!
//! ```rust
//! use inrange_core::*;
//!
//! let doc = Document::new();
//! let key = doc.add_listener(DocumentEvent::PointerUp, std::rc::Rc::new(|_e: &PointerEvent| {}));
//! assert_eq!(doc.listener_count(DocumentEvent::PointerUp), 1);
//! assert!(doc.remove_listener(key));
//! assert!(!doc.remove_listener(key));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::input::{PointerEvent, PointerEventKind};

new_key_type! {
    pub struct ListenerKey;
}

pub type Listener = Rc<dyn Fn(&PointerEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
    PointerMove,
    /// Pointer release and pointer cancel.
    PointerUp,
}

impl DocumentEvent {
    pub fn of(kind: PointerEventKind) -> Option<Self> {
        match kind {
            PointerEventKind::Move => Some(DocumentEvent::PointerMove),
            PointerEventKind::Up(_) | PointerEventKind::Cancel => Some(DocumentEvent::PointerUp),
            PointerEventKind::Down(_) => None,
        }
    }
}

#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

#[derive(Default)]
struct DocumentInner {
    listeners: SlotMap<ListenerKey, (DocumentEvent, Listener)>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.inner.borrow().listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, event: DocumentEvent, listener: Listener) -> ListenerKey {
        self.inner.borrow_mut().listeners.insert((event, listener))
    }

    /// Returns false if the key was already removed.
    pub fn remove_listener(&self, key: ListenerKey) -> bool {
        self.inner.borrow_mut().listeners.remove(key).is_some()
    }

    pub fn listener_count(&self, event: DocumentEvent) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|(e, _)| *e == event)
            .count()
    }

    /// Calls every listener registered for the event's kind. Returns the
    /// number of listeners called.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let Some(kind) = DocumentEvent::of(event.event) else {
            return 0;
        };

        // Snapshot so listeners can add or remove listeners while we iterate.
        let snapshot: Vec<(ListenerKey, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, (e, _))| *e == kind)
            .map(|(k, (_, l))| (k, l.clone()))
            .collect();

        let mut called = 0;
        for (key, listener) in snapshot {
            // Removed by an earlier listener in this same dispatch.
            if !self.inner.borrow().listeners.contains_key(key) {
                continue;
            }
            listener(event);
            called += 1;
        }
        called
    }
}
