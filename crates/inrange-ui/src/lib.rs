#![allow(non_snake_case)]
//! Range slider track, marker layout and value labels.
//!
//! - [`track`]: the draggable track and its pointer handling.
//! - [`marker`]: marker descriptors and the measure-then-center layout.
//! - [`gesture`]: document listener subscription and the previous-move slot.
//! - [`label`]: value labels with optional formatting.
//! - [`config`]: JSON-loadable track configuration.
//!
//! ## Lifecycle
//!
//! ```text
//! Track::new(props)      validate, bind handlers
//! track.render(kids)     first pass, markers at provisional offsets
//! track.mount(node, m)   measure markers, layout() -> Measured
//! track.render(kids)     markers centered
//! track.set_props(p)     owner update; new markers -> Unmeasured again
//! track.unmount()        release gesture listeners
//! ```

pub mod config;
pub mod gesture;
pub mod label;
pub mod marker;
pub mod track;

pub use config::TrackConfig;
pub use gesture::{DragTracker, GestureSubscription};
pub use label::{Label, LabelFormatter, LabelKind};
pub use marker::{Marker, MarkerLayout, MeasureMarker, marker_offset};
pub use track::{Percentages, Track, TrackNode, TrackProps};
