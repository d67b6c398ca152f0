use std::fmt;
use std::rc::Rc;

use inrange_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Which value a label shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Min,
    Max,
    Value,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Min => "min",
            LabelKind::Max => "max",
            LabelKind::Value => "value",
        }
    }

    pub fn class_name<'a>(&self, class_names: &'a ClassNames) -> &'a str {
        match self {
            LabelKind::Min => &class_names.min_label,
            LabelKind::Max => &class_names.max_label,
            LabelKind::Value => &class_names.value_label,
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type LabelFormatter = Rc<dyn Fn(f32, LabelKind) -> String>;

/// Value label: `format_label(value, kind)` when given, else the value as is.
pub fn Label(
    value: f32,
    kind: LabelKind,
    format_label: Option<&LabelFormatter>,
    class_names: &ClassNames,
    styles: &StyleOverrides,
) -> View {
    let text = match format_label {
        Some(format) => format(value, kind),
        None => value.to_string(),
    };

    View::new(ViewKind::Label)
        .class_name(kind.class_name(class_names))
        .style(styles.label())
        .child(
            View::new(ViewKind::Box)
                .class_name(class_names.label_container.clone())
                .child(View::text(text)),
        )
}
