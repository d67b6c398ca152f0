use std::rc::Rc;

use crate::{PointerEvent, Style};

pub type PointerHandler = Rc<dyn Fn(&mut PointerEvent)>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewKind {
    #[default]
    Box,
    Track,
    ActiveTrack,
    Marker,
    Label,
    Text { text: String },
}

/// Render output of a widget: a tree the host lays out and paints.
#[derive(Clone, Default)]
pub struct View {
    pub kind: ViewKind,
    pub class_name: Option<String>,
    pub style: Style,
    /// Stable identity among siblings.
    pub key: Option<String>,
    /// Host-visible element id.
    pub dom_id: Option<String>,
    pub children: Vec<View>,
    pub on_pointer_down: Option<PointerHandler>,
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("kind", &self.kind)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("key", &self.key)
            .field("dom_id", &self.dom_id)
            .field("children", &self.children)
            .field(
                "on_pointer_down",
                &self.on_pointer_down.as_ref().map(|_| "..."),
            )
            .finish()
    }
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            ..Default::default()
        }
    }
    pub fn text(text: impl Into<String>) -> Self {
        View::new(ViewKind::Text { text: text.into() })
    }
    pub fn class_name(mut self, c: impl Into<String>) -> Self {
        let c = c.into();
        self.class_name = if c.is_empty() { None } else { Some(c) };
        self
    }
    pub fn style(mut self, s: Style) -> Self {
        self.style = s;
        self
    }
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.key = Some(k.into());
        self
    }
    pub fn dom_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.dom_id = if id.is_empty() { None } else { Some(id) };
        self
    }
    pub fn child(mut self, v: View) -> Self {
        self.children.push(v);
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children.extend(kids);
        self
    }
    pub fn on_pointer_down(mut self, f: impl Fn(&mut PointerEvent) + 'static) -> Self {
        self.on_pointer_down = Some(Rc::new(f));
        self
    }

    pub fn children_of_kind<'a>(&'a self, kind: &'a ViewKind) -> impl Iterator<Item = &'a View> {
        self.children.iter().filter(move |c| &c.kind == kind)
    }

    /// Concatenated text of every `Text` view in this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let ViewKind::Text { text } = &self.kind {
            out.push_str(text);
        }
        for c in &self.children {
            c.collect_text(out);
        }
    }

    /// Path from the descendant at `indices` (child index per level) up to
    /// `self`, target first. `None` if an index is out of bounds.
    pub fn path(&self, indices: &[usize]) -> Option<Vec<&View>> {
        let mut chain = vec![self];
        let mut cur = self;
        for &i in indices {
            cur = cur.children.get(i)?;
            chain.push(cur);
        }
        chain.reverse();
        Some(chain)
    }
}

/// Delivers a press to each view along `path` (target first) until a
/// handler stops propagation. Returns the number of handlers called.
pub fn bubble_pointer_down(path: &[&View], event: &mut PointerEvent) -> usize {
    let mut called = 0;
    for view in path {
        if let Some(handler) = &view.on_pointer_down {
            handler(event);
            called += 1;
            if event.propagation_stopped() {
                break;
            }
        }
    }
    called
}
