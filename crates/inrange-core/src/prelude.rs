pub use crate::color::{Brush, Color};
pub use crate::document::{Document, DocumentEvent, Listener, ListenerKey};
pub use crate::error::TrackError;
pub use crate::geometry::{Rect, Vec2};
pub use crate::input::{PointerButton, PointerEvent, PointerEventKind, PointerKind};
pub use crate::length::Length;
pub use crate::signal::{Signal, signal};
pub use crate::style::{ClassNames, Position, Style, StyleOverrides, TextAlign};
pub use crate::view::{PointerHandler, View, ViewKind, bubble_pointer_down};
