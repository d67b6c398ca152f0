//! # Inrange core
//!
//! Host-agnostic primitives shared by the range widgets in `inrange-ui`:
//!
//! - `PointerEvent`: mouse/pen/touch input in client coordinates.
//! - `Document`: document-level listener registry used to follow a gesture
//!   after it leaves the widget.
//! - `Signal<T>`: observable value; widgets publish layout state through it.
//! - `Style`, `Length`, `ClassNames`: what a widget asks the host to draw.
//! - `View`: the render output tree, with bubbling press dispatch.
//!
//! ## Hosting a widget
//!
//! A host owns one `Document` per window and forwards every pointer move and
//! release into it, wherever the pointer is:
//!
//! ```rust
//! use inrange_core::*;
//!
//! let doc = Document::new();
//! let moves = std::rc::Rc::new(std::cell::Cell::new(0));
//! let key = doc.add_listener(DocumentEvent::PointerMove, {
//!     let moves = moves.clone();
//!     std::rc::Rc::new(move |_e: &PointerEvent| moves.set(moves.get() + 1))
//! });
//!
//! doc.dispatch(&PointerEvent::mouse(PointerEventKind::Move, 10.0, 0.0));
//! doc.remove_listener(key);
//! doc.dispatch(&PointerEvent::mouse(PointerEventKind::Move, 20.0, 0.0));
//! assert_eq!(moves.get(), 1);
//! ```
//!
//! Presses are hit-tested by the host against the laid-out `View` tree and
//! delivered with `bubble_pointer_down`, target first.

pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod length;
pub mod prelude;
pub mod signal;
pub mod style;
pub mod view;

pub use color::*;
pub use document::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use length::*;
pub use signal::*;
pub use style::*;
pub use view::*;
