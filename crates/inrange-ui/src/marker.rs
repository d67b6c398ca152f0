//! # Marker layout
//!
//! Markers are annotations pinned to a fraction of the track's length. A
//! marker should be centered on its point, which needs its rendered width,
//! and that is only known after the host has laid the marker out once. So
//! marker layout is a two-pass affair:
//!
//! 1. `MarkerLayout::Unmeasured`: markers render at a provisional offset
//!    (the raw `fraction * 100` number, no unit) so the host can lay them out.
//! 2. After mount the track measures every marker through `MeasureMarker`
//!    and moves to `MarkerLayout::Measured`; the next render places each
//!    marker at `calc(fraction*100% - round(width/2)px)`.
//!
//! The jump between the two passes is visible for one frame.
//!
//! ```rust
//! use inrange_core::Length;
//! use inrange_ui::marker::{Marker, MarkerLayout};
//!
//! let markers = vec![Marker::new("0.5", "half")];
//! let layout = MarkerLayout::measure(&markers, &|_i: usize, _m: &Marker| -> u32 { 20 });
//! assert_eq!(layout.offset_for(0, &markers[0], 0.5).to_string(), "calc(50% - 10px)");
//! assert_eq!(MarkerLayout::Unmeasured.offset_for(0, &markers[0], 0.5), Length::Number(50.0));
//! ```

use std::rc::Rc;

use inrange_core::prelude::*;
use serde::{Deserialize, Serialize};

pub type MarkerCallback = Rc<dyn Fn(&Marker)>;

/// A fixed annotation on the track.
///
/// `percentage` is a string-encoded fraction of the track length, e.g.
/// `".70"`. `width`, when set, replaces the measured width for centering.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Marker {
    pub percentage: String,
    pub class_name: String,
    pub content: String,
    pub id: String,
    pub width: Option<u32>,
    #[serde(skip)]
    pub on_click: Option<MarkerCallback>,
}

impl std::fmt::Debug for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Marker")
            .field("percentage", &self.percentage)
            .field("class_name", &self.class_name)
            .field("content", &self.content)
            .field("id", &self.id)
            .field("width", &self.width)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .finish()
    }
}

// Callbacks have no identity worth comparing.
impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.percentage == other.percentage
            && self.class_name == other.class_name
            && self.content == other.content
            && self.id == other.id
            && self.width == other.width
    }
}

impl Marker {
    pub fn new(percentage: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            percentage: percentage.into(),
            content: content.into(),
            ..Default::default()
        }
    }
    pub fn class_name(mut self, c: impl Into<String>) -> Self {
        self.class_name = c.into();
        self
    }
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
    pub fn width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }
    pub fn on_click(mut self, f: impl Fn(&Marker) + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Parsed `percentage`.
    pub fn fraction(&self) -> Result<f32, TrackError> {
        self.percentage
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| TrackError::InvalidMarkerPercentage {
                id: self.id.clone(),
                value: self.percentage.clone(),
            })
    }
}

/// Host-side measurement of a rendered marker, in whole pixels.
pub trait MeasureMarker {
    fn marker_width(&self, index: usize, marker: &Marker) -> u32;
}

impl<F> MeasureMarker for F
where
    F: Fn(usize, &Marker) -> u32,
{
    fn marker_width(&self, index: usize, marker: &Marker) -> u32 {
        self(index, marker)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MarkerLayout {
    #[default]
    Unmeasured,
    /// Index-aligned with the marker list it was measured from.
    Measured { widths: Vec<u32> },
}

impl MarkerLayout {
    pub fn measure(markers: &[Marker], measure: &dyn MeasureMarker) -> Self {
        MarkerLayout::Measured {
            widths: markers
                .iter()
                .enumerate()
                .map(|(i, m)| measure.marker_width(i, m))
                .collect(),
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, MarkerLayout::Measured { .. })
    }

    pub fn widths(&self) -> &[u32] {
        match self {
            MarkerLayout::Unmeasured => &[],
            MarkerLayout::Measured { widths } => widths,
        }
    }

    /// Width used to center marker `index`: its override, else its measured
    /// width, else none.
    pub fn width_for(&self, index: usize, marker: &Marker) -> Option<u32> {
        marker.width.or_else(|| self.widths().get(index).copied())
    }

    pub fn offset_for(&self, index: usize, marker: &Marker, fraction: f32) -> Length {
        marker_offset(fraction, self.width_for(index, marker))
    }
}

/// Left offset of a marker at `fraction` of the track.
///
/// Without a width this is the raw `fraction * 100` number with no unit.
pub fn marker_offset(fraction: f32, width: Option<u32>) -> Length {
    match width {
        None => Length::Number(fraction * 100.0),
        Some(w) => Length::Calc {
            percent: fraction * 100.0,
            minus_px: (w as f32 / 2.0).round(),
        },
    }
}

/// Marker view. Pressing it stops propagation, so the track underneath
/// does not see the press, and calls the marker's `on_click` with itself.
pub fn marker_view(marker: &Marker, left: Length) -> View {
    let style = Style::new()
        .position(Position::Absolute)
        .left(left)
        .text_align(TextAlign::Center);

    let clicked = marker.clone();
    View::new(ViewKind::Marker)
        .key(marker.percentage.clone())
        .class_name(marker.class_name.clone())
        .dom_id(marker.id.clone())
        .style(style)
        .on_pointer_down(move |e| {
            e.stop_propagation();
            if let Some(cb) = &clicked.on_click {
                cb(&clicked);
            }
        })
        .child(View::text(marker.content.clone()))
}
