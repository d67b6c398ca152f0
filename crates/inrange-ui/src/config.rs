use inrange_core::{ClassNames, StyleOverrides};
use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// Serializable part of `TrackProps`. Missing keys take their defaults.
///
/// ```rust
/// use inrange_ui::config::TrackConfig;
///
/// let cfg: TrackConfig = serde_json::from_str(r#"{ "draggable_track": true }"#).unwrap();
/// assert!(cfg.draggable_track);
/// assert!(cfg.markers.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub draggable_track: bool,
    pub markers: Vec<Marker>,
    pub styles: StyleOverrides,
    pub class_names: ClassNames,
}
