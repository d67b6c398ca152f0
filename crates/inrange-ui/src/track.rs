//! # Track
//!
//! The track is the draggable body of a range slider. It paints the
//! background, the active segment between the owner's `min` and `max`
//! fractions, the markers, and whatever children the owner nests in it
//! (usually the handles).
//!
//! The track does not know about values. It reports raw geometry upward:
//!
//! - every press calls `on_track_mouse_down(event, {x, 0})`, `x` in pixels
//!   from the track's left edge;
//! - with `draggable_track`, the press also starts a gesture, and each
//!   document-level move after the first calls
//!   `on_track_drag(event, previous_event)`.
//!
//! The owner turns those into values and renders the track again with new
//! props.
//!
//! ```rust
//! use std::rc::Rc;
//! use inrange_core::*;
//! use inrange_ui::marker::Marker;
//! use inrange_ui::track::{Percentages, Track, TrackNode, TrackProps};
//!
//! struct Node(Document);
//! impl TrackNode for Node {
//!     fn bounding_client_rect(&self) -> Rect { Rect::new(50.0, 0.0, 200.0, 8.0) }
//!     fn owner_document(&self) -> Document { self.0.clone() }
//! }
//!
//! let pressed = Rc::new(std::cell::Cell::new(0.0));
//! let props = TrackProps::new(Percentages::new(0.2, 0.6).unwrap(), {
//!     let pressed = pressed.clone();
//!     move |_e: &PointerEvent, pos: Vec2| pressed.set(pos.x)
//! });
//! let track = Track::new(props).unwrap();
//! track.mount(Rc::new(Node(Document::new())), &|_i: usize, _m: &Marker| -> u32 { 0 });
//!
//! let view = track.render(vec![]);
//! let mut press = PointerEvent::mouse(PointerEventKind::Down(PointerButton::Primary), 150.0, 4.0);
//! bubble_pointer_down(&[&view], &mut press);
//! assert_eq!(pressed.get(), 100.0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use inrange_core::prelude::*;

use crate::config::TrackConfig;
use crate::gesture::{DragTracker, GestureSubscription};
use crate::marker::{Marker, MarkerLayout, MeasureMarker, marker_view};

pub type TrackPressCallback = Rc<dyn Fn(&PointerEvent, Vec2)>;
pub type TrackDragCallback = Rc<dyn Fn(&PointerEvent, &PointerEvent)>;

/// Active segment as fractions of the track length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentages {
    min: f32,
    max: f32,
}

impl Percentages {
    pub fn new(min: f32, max: f32) -> Result<Self, TrackError> {
        let valid = min.is_finite() && max.is_finite() && 0.0 <= min && min <= max && max <= 1.0;
        if !valid {
            return Err(TrackError::InvalidPercentages { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// `left = min*100%`, `width = (max-min)*100%`.
    pub fn active_track_style(&self) -> Style {
        Style::new()
            .left(Length::Percent(self.min * 100.0))
            .width(Length::Percent((self.max - self.min) * 100.0))
    }
}

/// Host handle for the rendered track element.
pub trait TrackNode {
    /// Current box in client coordinates. Read on every press.
    fn bounding_client_rect(&self) -> Rect;
    /// Document the drag listeners are installed on.
    fn owner_document(&self) -> Document;
}

#[derive(Clone)]
pub struct TrackProps {
    pub percentages: Percentages,
    pub draggable_track: bool,
    pub markers: Vec<Marker>,
    pub on_track_mouse_down: TrackPressCallback,
    pub on_track_drag: Option<TrackDragCallback>,
    pub styles: StyleOverrides,
    pub class_names: ClassNames,
}

impl std::fmt::Debug for TrackProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackProps")
            .field("percentages", &self.percentages)
            .field("draggable_track", &self.draggable_track)
            .field("markers", &self.markers)
            .field("on_track_mouse_down", &"<callback>")
            .field("on_track_drag", &self.on_track_drag.as_ref().map(|_| "<callback>"))
            .field("styles", &self.styles)
            .field("class_names", &self.class_names)
            .finish()
    }
}

impl TrackProps {
    pub fn new(
        percentages: Percentages,
        on_track_mouse_down: impl Fn(&PointerEvent, Vec2) + 'static,
    ) -> Self {
        Self {
            percentages,
            draggable_track: false,
            markers: Vec::new(),
            on_track_mouse_down: Rc::new(on_track_mouse_down),
            on_track_drag: None,
            styles: StyleOverrides::default(),
            class_names: ClassNames::default(),
        }
    }

    pub fn percentages(mut self, p: Percentages) -> Self {
        self.percentages = p;
        self
    }
    pub fn draggable_track(mut self, on: bool) -> Self {
        self.draggable_track = on;
        self
    }
    pub fn markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }
    pub fn on_track_drag(mut self, f: impl Fn(&PointerEvent, &PointerEvent) + 'static) -> Self {
        self.on_track_drag = Some(Rc::new(f));
        self
    }
    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }
    pub fn class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    /// Applies the serializable part of the props.
    pub fn with_config(self, config: TrackConfig) -> Self {
        self.draggable_track(config.draggable_track)
            .markers(config.markers)
            .styles(config.styles)
            .class_names(config.class_names)
    }

    fn marker_fractions(&self) -> Result<Vec<f32>, TrackError> {
        self.markers.iter().map(Marker::fraction).collect()
    }
}

/// Mutable per-instance state. Only the track's own handlers write to it.
struct TrackState {
    props: TrackProps,
    fractions: Vec<f32>,
    node: Option<Rc<dyn TrackNode>>,
    drag: DragTracker,
    gesture: Option<GestureSubscription>,
}

struct TrackInner {
    state: RefCell<TrackState>,
    layout: Signal<MarkerLayout>,
    // Bound once so every render and every subscription shares them.
    on_move: Listener,
    on_up: Listener,
    on_pointer_down: PointerHandler,
}

/// Range track. Cheap to clone; clones share one instance.
#[derive(Clone)]
pub struct Track {
    inner: Rc<TrackInner>,
}

impl std::fmt::Debug for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("Track")
            .field("props", &st.props)
            .field("mounted", &st.node.is_some())
            .field("gesture", &st.gesture)
            .field("layout", &self.inner.layout)
            .finish()
    }
}

impl Track {
    pub fn new(props: TrackProps) -> Result<Self, TrackError> {
        let fractions = props.marker_fractions()?;
        let state = TrackState {
            props,
            fractions,
            node: None,
            drag: DragTracker::new(),
            gesture: None,
        };

        let inner = Rc::new_cyclic(|weak: &Weak<TrackInner>| {
            let on_move: Listener = {
                let weak = weak.clone();
                Rc::new(move |e: &PointerEvent| {
                    if let Some(t) = weak.upgrade() {
                        t.handle_move(e);
                    }
                })
            };
            let on_up: Listener = {
                let weak = weak.clone();
                Rc::new(move |_e: &PointerEvent| {
                    if let Some(t) = weak.upgrade() {
                        t.handle_up();
                    }
                })
            };
            let on_pointer_down: PointerHandler = {
                let weak = weak.clone();
                Rc::new(move |e: &mut PointerEvent| {
                    if let Some(t) = weak.upgrade() {
                        if let Err(err) = t.handle_pointer_down(e) {
                            log::warn!("track: press dropped: {err}");
                        }
                    }
                })
            };
            TrackInner {
                state: RefCell::new(state),
                layout: signal(MarkerLayout::Unmeasured),
                on_move,
                on_up,
                on_pointer_down,
            }
        });

        Ok(Self { inner })
    }

    /// Owner re-render. A changed marker list drops the measured widths.
    pub fn set_props(&self, props: TrackProps) -> Result<(), TrackError> {
        let fractions = props.marker_fractions()?;
        let markers_changed = {
            let mut st = self.inner.state.borrow_mut();
            let changed = st.props.markers != props.markers;
            st.props = props;
            st.fractions = fractions;
            changed
        };
        if markers_changed && self.inner.layout.with(MarkerLayout::is_measured) {
            log::debug!("track: markers changed, layout back to unmeasured");
            self.inner.layout.set(MarkerLayout::Unmeasured);
        }
        Ok(())
    }

    pub fn props(&self) -> TrackProps {
        self.inner.state.borrow().props.clone()
    }

    /// Stores the node handle and runs the first marker measurement.
    pub fn mount(&self, node: Rc<dyn TrackNode>, measure: &dyn MeasureMarker) {
        self.inner.state.borrow_mut().node = Some(node);
        self.measure_markers(measure);
    }

    /// Ends any gesture and forgets the node and the measured widths.
    pub fn unmount(&self) {
        let gesture = {
            let mut st = self.inner.state.borrow_mut();
            st.drag.reset();
            st.node = None;
            st.gesture.take()
        };
        drop(gesture);
        if self.inner.layout.with(MarkerLayout::is_measured) {
            self.inner.layout.set(MarkerLayout::Unmeasured);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.state.borrow().node.is_some()
    }

    /// Measures every marker and moves to `MarkerLayout::Measured`.
    /// Subscribers of `layout()` are notified only if the widths changed.
    pub fn measure_markers(&self, measure: &dyn MeasureMarker) -> bool {
        let markers = self.inner.state.borrow().props.markers.clone();
        let next = MarkerLayout::measure(&markers, measure);
        let changed = self.inner.layout.with(|cur| *cur != next);
        if changed {
            log::debug!("track: measured {} marker(s): {:?}", markers.len(), next.widths());
            self.inner.layout.set(next);
        }
        changed
    }

    /// Marker layout state; subscribe to re-render after measurement.
    pub fn layout(&self) -> &Signal<MarkerLayout> {
        &self.inner.layout
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.state.borrow().gesture.is_some()
    }

    /// The press handler bound into rendered views. Same `Rc` for the
    /// lifetime of the track.
    pub fn pointer_down_handler(&self) -> PointerHandler {
        self.inner.on_pointer_down.clone()
    }

    pub fn handle_pointer_down(&self, event: &mut PointerEvent) -> Result<(), TrackError> {
        self.inner.handle_pointer_down(event)
    }

    pub fn handle_mouse_down(&self, event: &PointerEvent) -> Result<(), TrackError> {
        self.inner.handle_mouse_down(event)
    }

    pub fn handle_touch_start(&self, event: &mut PointerEvent) -> Result<(), TrackError> {
        self.inner.handle_touch_start(event)
    }

    pub fn active_track_style(&self) -> Style {
        self.inner.state.borrow().props.percentages.active_track_style()
    }

    pub fn render(&self, children: Vec<View>) -> View {
        let st = self.inner.state.borrow();
        let props = &st.props;

        let active = View::new(ViewKind::ActiveTrack)
            .class_name(props.class_names.active_track.clone())
            .style(props.styles.active().merge(props.percentages.active_track_style()));

        let mut track = View::new(ViewKind::Track)
            .class_name(props.class_names.track.clone())
            .style(props.styles.track())
            .child(active);

        self.inner.layout.with(|layout| {
            for (i, (marker, fraction)) in props.markers.iter().zip(&st.fractions).enumerate() {
                track.children.push(marker_view(marker, layout.offset_for(i, marker, *fraction)));
            }
        });

        track.on_pointer_down = Some(self.inner.on_pointer_down.clone());
        track.with_children(children)
    }
}

impl TrackInner {
    fn handle_pointer_down(&self, event: &mut PointerEvent) -> Result<(), TrackError> {
        match event.kind {
            PointerKind::Touch => self.handle_touch_start(event),
            PointerKind::Mouse | PointerKind::Pen => self.handle_mouse_down(event),
        }
    }

    fn handle_touch_start(&self, event: &mut PointerEvent) -> Result<(), TrackError> {
        event.prevent_default();
        self.handle_mouse_down(event)
    }

    fn handle_mouse_down(&self, event: &PointerEvent) -> Result<(), TrackError> {
        let (node, on_down) = {
            let st = self.state.borrow();
            let node = st.node.clone().ok_or(TrackError::NotMounted)?;
            (node, st.props.on_track_mouse_down.clone())
        };

        let rect = node.bounding_client_rect();
        let position = Vec2 {
            x: event.client_x() - rect.left(),
            y: 0.0,
        };
        on_down(event, position);

        // Props may have been replaced inside the callback.
        if self.state.borrow().props.draggable_track {
            self.begin_gesture(&node.owner_document());
        }
        Ok(())
    }

    fn begin_gesture(&self, document: &Document) {
        let previous = {
            let mut st = self.state.borrow_mut();
            st.drag.reset();
            st.gesture.take()
        };
        // Unsubscribe the old pair before the new one goes in.
        drop(previous);

        let sub = GestureSubscription::subscribe(document, self.on_move.clone(), self.on_up.clone());
        self.state.borrow_mut().gesture = Some(sub);
        log::debug!("track: drag gesture started");
    }

    fn handle_move(&self, event: &PointerEvent) {
        let (on_drag, previous) = {
            let mut st = self.state.borrow_mut();
            if !st.props.draggable_track {
                return;
            }
            let previous = st.drag.advance(event);
            (st.props.on_track_drag.clone(), previous)
        };

        if let (Some(on_drag), Some(previous)) = (on_drag, previous) {
            log::trace!(
                "track: drag {} -> {}",
                previous.client_x(),
                event.client_x()
            );
            on_drag(event, &previous);
        }
    }

    fn handle_up(&self) {
        let gesture = {
            let mut st = self.state.borrow_mut();
            st.drag.reset();
            st.gesture.take()
        };
        if gesture.is_some() {
            log::debug!("track: drag gesture ended");
        }
        drop(gesture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeNode {
        rect: Cell<Rect>,
        document: Document,
    }

    impl TrackNode for FakeNode {
        fn bounding_client_rect(&self) -> Rect {
            self.rect.get()
        }
        fn owner_document(&self) -> Document {
            self.document.clone()
        }
    }

    fn node(doc: &Document) -> Rc<FakeNode> {
        Rc::new(FakeNode {
            rect: Cell::new(Rect::new(50.0, 0.0, 200.0, 10.0)),
            document: doc.clone(),
        })
    }

    fn no_measure() -> impl Fn(usize, &Marker) -> u32 {
        |_i: usize, _m: &Marker| -> u32 { 0 }
    }

    fn down(x: f32) -> PointerEvent {
        PointerEvent::mouse(PointerEventKind::Down(PointerButton::Primary), x, 5.0)
    }
    fn mv(x: f32) -> PointerEvent {
        PointerEvent::mouse(PointerEventKind::Move, x, 5.0)
    }
    fn up(x: f32) -> PointerEvent {
        PointerEvent::mouse(PointerEventKind::Up(PointerButton::Primary), x, 5.0)
    }

    fn pct(min: f32, max: f32) -> Percentages {
        Percentages::new(min, max).unwrap()
    }

    #[derive(Default)]
    struct Calls {
        presses: RefCell<Vec<Vec2>>,
        drags: RefCell<Vec<(f32, f32)>>,
    }

    fn props(calls: &Rc<Calls>, draggable: bool) -> TrackProps {
        TrackProps::new(pct(0.2, 0.6), {
            let calls = calls.clone();
            move |_e: &PointerEvent, pos: Vec2| calls.presses.borrow_mut().push(pos)
        })
        .draggable_track(draggable)
        .on_track_drag({
            let calls = calls.clone();
            move |e: &PointerEvent, prev: &PointerEvent| {
                calls.drags.borrow_mut().push((e.client_x(), prev.client_x()))
            }
        })
    }

    fn mounted(calls: &Rc<Calls>, draggable: bool) -> (Track, Document) {
        let doc = Document::new();
        let track = Track::new(props(calls, draggable)).unwrap();
        track.mount(node(&doc), &no_measure());
        (track, doc)
    }

    #[test]
    fn active_segment_follows_percentages() {
        for (min, max) in [(0.0, 1.0), (0.2, 0.6), (0.5, 0.5), (0.0, 0.0)] {
            let s = pct(min, max).active_track_style();
            assert_eq!(s.left, Some(Length::Percent(min * 100.0)));
            assert_eq!(s.width, Some(Length::Percent((max - min) * 100.0)));
        }
        let s = pct(0.25, 0.75).active_track_style();
        insta::assert_snapshot!(
            format!("{} {}", s.left.unwrap(), s.width.unwrap()),
            @"25% 50%"
        );
    }

    #[test]
    fn invalid_percentages_are_rejected() {
        assert_eq!(
            Percentages::new(0.7, 0.3),
            Err(TrackError::InvalidPercentages { min: 0.7, max: 0.3 })
        );
        assert!(Percentages::new(-0.1, 0.3).is_err());
        assert!(Percentages::new(0.1, 1.5).is_err());
        assert!(Percentages::new(f32::NAN, 0.5).is_err());
    }

    #[test]
    fn press_reports_position_from_track_left() {
        let calls = Rc::new(Calls::default());
        let (track, _doc) = mounted(&calls, false);

        track.handle_mouse_down(&down(150.0)).unwrap();
        assert_eq!(*calls.presses.borrow(), vec![Vec2::new(100.0, 0.0)]);
    }

    #[test]
    fn client_rect_is_read_on_every_press() {
        let calls = Rc::new(Calls::default());
        let doc = Document::new();
        let n = node(&doc);
        let track = Track::new(props(&calls, false)).unwrap();
        track.mount(n.clone(), &no_measure());

        track.handle_mouse_down(&down(150.0)).unwrap();
        n.rect.set(Rect::new(100.0, 0.0, 200.0, 10.0));
        track.handle_mouse_down(&down(150.0)).unwrap();
        assert_eq!(
            *calls.presses.borrow(),
            vec![Vec2::new(100.0, 0.0), Vec2::new(50.0, 0.0)]
        );
    }

    #[test]
    fn touch_press_uses_first_touch_and_prevents_default() {
        let calls = Rc::new(Calls::default());
        let (track, _doc) = mounted(&calls, false);

        let mut e = PointerEvent::touch(PointerEventKind::Down(PointerButton::Primary), 0.0, 0.0)
            .with_touches([Vec2::new(90.0, 3.0), Vec2::new(220.0, 3.0)]);
        track.handle_pointer_down(&mut e).unwrap();

        assert!(e.default_prevented());
        assert_eq!(*calls.presses.borrow(), vec![Vec2::new(40.0, 0.0)]);
    }

    #[test]
    fn press_before_mount_fails() {
        let calls = Rc::new(Calls::default());
        let track = Track::new(props(&calls, true)).unwrap();
        assert_eq!(
            track.handle_mouse_down(&down(10.0)),
            Err(TrackError::NotMounted)
        );
        assert!(calls.presses.borrow().is_empty());
    }

    #[test]
    fn each_move_is_reported_against_the_previous_one() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        assert!(track.is_dragging());
        for x in [110.0, 120.0, 130.0, 140.0] {
            doc.dispatch(&mv(x));
        }

        assert_eq!(
            *calls.drags.borrow(),
            vec![(120.0, 110.0), (130.0, 120.0), (140.0, 130.0)]
        );
    }

    #[test]
    fn release_ends_the_gesture_anywhere() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        doc.dispatch(&mv(110.0));
        doc.dispatch(&mv(120.0));
        // Released far outside the track.
        doc.dispatch(&up(900.0));

        assert!(!track.is_dragging());
        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 0);
        assert_eq!(doc.listener_count(DocumentEvent::PointerUp), 0);

        doc.dispatch(&mv(130.0));
        doc.dispatch(&mv(140.0));
        assert_eq!(*calls.drags.borrow(), vec![(120.0, 110.0)]);
    }

    #[test]
    fn new_press_starts_a_fresh_gesture() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        doc.dispatch(&mv(110.0));
        doc.dispatch(&up(110.0));
        track.handle_mouse_down(&down(100.0)).unwrap();

        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 1);
        assert_eq!(doc.listener_count(DocumentEvent::PointerUp), 1);

        // The first move of the new gesture has nothing to diff against.
        assert_eq!(doc.dispatch(&mv(120.0)), 1);
        assert_eq!(doc.dispatch(&mv(130.0)), 1);
        assert_eq!(*calls.drags.borrow(), vec![(130.0, 120.0)]);
    }

    #[test]
    fn press_without_release_replaces_listeners() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        doc.dispatch(&mv(110.0));
        track.handle_mouse_down(&down(100.0)).unwrap();

        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 1);
        doc.dispatch(&mv(120.0));
        doc.dispatch(&mv(130.0));
        // Stale record from the first gesture was cleared.
        assert_eq!(*calls.drags.borrow(), vec![(130.0, 120.0)]);
    }

    #[test]
    fn non_draggable_track_never_drags() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, false);

        track.handle_mouse_down(&down(100.0)).unwrap();
        for x in [110.0, 120.0, 130.0] {
            doc.dispatch(&mv(x));
        }

        assert!(!track.is_dragging());
        assert!(calls.drags.borrow().is_empty());
        assert_eq!(calls.presses.borrow().len(), 1);
    }

    #[test]
    fn draggable_turned_off_mid_gesture_still_releases() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        track.set_props(props(&calls, false)).unwrap();
        doc.dispatch(&mv(110.0));
        doc.dispatch(&mv(120.0));
        doc.dispatch(&up(120.0));

        assert!(calls.drags.borrow().is_empty());
        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 0);
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        assert_eq!(doc.dispatch(&up(0.0)), 0);
        assert!(!track.is_dragging());
    }

    #[test]
    fn owner_can_update_props_from_callbacks() {
        let doc = Document::new();
        let slot: Rc<RefCell<Option<Track>>> = Rc::new(RefCell::new(None));
        let drags = Rc::new(Cell::new(0));

        let make_props = {
            let slot = slot.clone();
            let drags = drags.clone();
            move |min: f32| {
                let slot = slot.clone();
                let drags = drags.clone();
                TrackProps::new(pct(min, 0.9), |_e: &PointerEvent, _p: Vec2| {})
                    .draggable_track(true)
                    .on_track_drag(move |e: &PointerEvent, prev: &PointerEvent| {
                        drags.set(drags.get() + 1);
                        let dx = (e.client_x() - prev.client_x()) / 200.0;
                        if let Some(track) = slot.borrow().as_ref() {
                            let cur = track.props();
                            let min = (cur.percentages.min() + dx).clamp(0.0, 0.9);
                            let next = cur.percentages(pct(min, 0.9));
                            track.set_props(next).unwrap();
                        }
                    })
            }
        };

        let track = Track::new(make_props(0.1)).unwrap();
        track.mount(node(&doc), &no_measure());
        *slot.borrow_mut() = Some(track.clone());

        track.handle_mouse_down(&down(100.0)).unwrap();
        doc.dispatch(&mv(100.0));
        doc.dispatch(&mv(120.0));
        doc.dispatch(&mv(140.0));

        assert_eq!(drags.get(), 2);
        assert!((track.props().percentages.min() - 0.3).abs() < 1e-5);

        slot.borrow_mut().take();
    }

    #[test]
    fn dropping_the_track_removes_its_listeners() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 1);

        drop(track);
        assert_eq!(doc.listener_count(DocumentEvent::PointerMove), 0);
        assert_eq!(doc.listener_count(DocumentEvent::PointerUp), 0);
    }

    #[test]
    fn unmount_releases_the_gesture() {
        let calls = Rc::new(Calls::default());
        let (track, doc) = mounted(&calls, true);

        track.handle_mouse_down(&down(100.0)).unwrap();
        track.unmount();

        assert!(!track.is_mounted());
        assert!(!track.is_dragging());
        assert_eq!(doc.listener_count(DocumentEvent::PointerUp), 0);
    }

    #[test]
    fn handlers_are_stable_across_renders() {
        let calls = Rc::new(Calls::default());
        let (track, _doc) = mounted(&calls, true);

        let a = track.render(vec![]).on_pointer_down.unwrap();
        let b = track.render(vec![]).on_pointer_down.unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(Rc::ptr_eq(&a, &track.pointer_down_handler()));
    }

    fn half_marker() -> Marker {
        Marker::new("0.5", "half").class_name("slider-marker").id("m-half")
    }

    #[test]
    fn markers_render_raw_then_centered() {
        let calls = Rc::new(Calls::default());
        let doc = Document::new();
        let track = Track::new(props(&calls, false).markers(vec![half_marker()])).unwrap();

        let notified = Rc::new(Cell::new(0));
        track.layout().subscribe({
            let notified = notified.clone();
            move |_l| notified.set(notified.get() + 1)
        });

        let first = track.render(vec![]);
        let marker = first.children_of_kind(&ViewKind::Marker).next().unwrap();
        assert_eq!(marker.style.left, Some(Length::Number(50.0)));

        track.mount(node(&doc), &|_i: usize, _m: &Marker| -> u32 { 20 });
        assert_eq!(notified.get(), 1);

        let second = track.render(vec![]);
        let marker = second.children_of_kind(&ViewKind::Marker).next().unwrap();
        insta::assert_snapshot!(marker.style.left.unwrap(), @"calc(50% - 10px)");
        assert_eq!(marker.style.position, Some(Position::Absolute));
        assert_eq!(marker.style.text_align, Some(TextAlign::Center));
        // 200px track: the marker's left edge sits 10px before the midpoint.
        assert_eq!(marker.style.left.unwrap().resolve(200.0), 90.0);
    }

    #[test]
    fn layout_subscriber_can_swap_markers() {
        let calls = Rc::new(Calls::default());
        let doc = Document::new();
        let track = Track::new(props(&calls, false).markers(vec![half_marker()])).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let swapped = Rc::new(Cell::new(false));
        track.layout().subscribe({
            let weak = Rc::downgrade(&track.inner);
            let (seen, swapped, calls) = (seen.clone(), swapped.clone(), calls.clone());
            move |l: &MarkerLayout| {
                seen.borrow_mut().push(l.is_measured());
                if l.is_measured() && !swapped.replace(true) {
                    let track = Track { inner: weak.upgrade().unwrap() };
                    track
                        .set_props(props(&calls, false).markers(vec![Marker::new("0.25", "q")]))
                        .unwrap();
                }
            }
        });

        track.mount(node(&doc), &|_i: usize, _m: &Marker| -> u32 { 20 });

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!track.layout().with(MarkerLayout::is_measured));
        assert_eq!(track.props().markers[0].percentage, "0.25");

        assert!(track.measure_markers(&|_i: usize, _m: &Marker| -> u32 { 30 }));
        let view = track.render(vec![]);
        let marker = view.children_of_kind(&ViewKind::Marker).next().unwrap();
        insta::assert_snapshot!(marker.style.left.unwrap(), @"calc(25% - 15px)");
    }

    #[test]
    fn remeasuring_unchanged_markers_is_stable() {
        let calls = Rc::new(Calls::default());
        let doc = Document::new();
        let markers = vec![half_marker(), Marker::new(".95", "alot")];
        let track = Track::new(props(&calls, false).markers(markers)).unwrap();
        let measure = |i: usize, _m: &Marker| -> u32 { 20 + i as u32 * 10 };

        track.mount(node(&doc), &measure);
        let before = track.layout().get();
        assert!(!track.measure_markers(&measure));
        assert_eq!(track.layout().get(), before);
        assert_eq!(before.widths(), &[20, 30]);
    }

    #[test]
    fn changing_markers_drops_measurements() {
        let calls = Rc::new(Calls::default());
        let doc = Document::new();
        let track = Track::new(props(&calls, false).markers(vec![half_marker()])).unwrap();
        track.mount(node(&doc), &|_i: usize, _m: &Marker| -> u32 { 20 });
        assert!(track.layout().with(MarkerLayout::is_measured));

        // Same markers with a new callback: still measured.
        track
            .set_props(props(&calls, false).markers(vec![half_marker().on_click(|_m| {})]))
            .unwrap();
        assert!(track.layout().with(MarkerLayout::is_measured));

        track
            .set_props(props(&calls, false).markers(vec![Marker::new("0.25", "quarter")]))
            .unwrap();
        assert_eq!(track.layout().get(), MarkerLayout::Unmeasured);

        let view = track.render(vec![]);
        let marker = view.children_of_kind(&ViewKind::Marker).next().unwrap();
        assert_eq!(marker.style.left, Some(Length::Number(25.0)));
    }

    #[test]
    fn invalid_marker_is_rejected() {
        let calls = Rc::new(Calls::default());
        let err = Track::new(props(&calls, false).markers(vec![Marker::new("abc", "").id("bad")]))
            .unwrap_err();
        assert_eq!(
            err,
            TrackError::InvalidMarkerPercentage {
                id: "bad".into(),
                value: "abc".into()
            }
        );
    }

    #[test]
    fn marker_press_does_not_reach_the_track() {
        let calls = Rc::new(Calls::default());
        let clicked = Rc::new(Cell::new(false));
        let doc = Document::new();
        let marker = half_marker().on_click({
            let clicked = clicked.clone();
            move |m| clicked.set(m.id == "m-half")
        });
        let track = Track::new(props(&calls, true).markers(vec![marker])).unwrap();
        track.mount(node(&doc), &no_measure());

        let view = track.render(vec![]);
        // [active, marker]
        let path = view.path(&[1]).unwrap();
        let mut e = down(150.0);
        bubble_pointer_down(&path, &mut e);

        assert!(clicked.get());
        assert!(calls.presses.borrow().is_empty());
        assert!(!track.is_dragging());

        // A press on the active segment bubbles up to the track.
        let path = view.path(&[0]).unwrap();
        bubble_pointer_down(&path, &mut down(150.0));
        assert_eq!(*calls.presses.borrow(), vec![Vec2::new(100.0, 0.0)]);
        assert!(track.is_dragging());
    }

    #[test]
    fn render_layers_styles_and_children() {
        let calls = Rc::new(Calls::default());
        let orange = Color::from_hex("#FFA500");
        let styles = StyleOverrides {
            track: Some(Style::new().background(Brush::horizontal(&[orange, Color::WHITE]))),
            active: Some(Style::new().background(orange).left(Length::Px(999.0))),
            label: None,
        };
        let track = Track::new(props(&calls, false).styles(styles)).unwrap();

        let view = track.render(vec![View::new(ViewKind::Box).key("handle")]);
        assert_eq!(view.kind, ViewKind::Track);
        assert_eq!(
            view.class_name.as_deref(),
            Some("input-range__track input-range__track--background")
        );
        assert!(view.style.background.is_some());
        assert_eq!(view.children.len(), 2);

        let active = &view.children[0];
        assert_eq!(active.kind, ViewKind::ActiveTrack);
        assert_eq!(active.style.background, Some(Brush::Solid(orange)));
        insta::assert_snapshot!(
            format!("{} {}", active.style.left.unwrap(), active.style.width.unwrap()),
            @"20% 40%"
        );
        assert_eq!(view.children[1].key.as_deref(), Some("handle"));
    }

    #[test]
    fn props_from_config() {
        let cfg: TrackConfig = serde_json::from_str(
            r#"{
                "draggable_track": true,
                "markers": [{ "percentage": ".70", "content": "a whole lot", "width": 175 }],
                "class_names": { "track": "my-track" }
            }"#,
        )
        .unwrap();
        let calls = Rc::new(Calls::default());
        let track = Track::new(props(&calls, false).with_config(cfg)).unwrap();

        let p = track.props();
        assert!(p.draggable_track);
        assert_eq!(p.class_names.track, "my-track");
        assert_eq!(
            p.class_names.active_track,
            ClassNames::default().active_track
        );

        // Width override centers before any measurement.
        let view = track.render(vec![]);
        let marker = view.children_of_kind(&ViewKind::Marker).next().unwrap();
        insta::assert_snapshot!(marker.style.left.unwrap(), @"calc(70% - 88px)");
    }
}
