//! Form field value objects

use crate::state::{AttributeName, FieldKind};

/// Rendering and editing rules for one attribute in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: AttributeName,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub fn for_attribute(name: AttributeName) -> Self {
        Self {
            name,
            label: name.label(),
            kind: name.kind(),
        }
    }

    /// All fields in form order
    pub fn all() -> Vec<FormField> {
        AttributeName::ALL.into_iter().map(Self::for_attribute).collect()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Whether typing `c` into this field is allowed.
    /// Numeric fields take digits and a decimal point; choice fields take no text.
    pub fn accepts_char(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Numeric => c.is_ascii_digit() || c == '.',
            FieldKind::Choice(_) => false,
        }
    }

    /// The option after `current`, wrapping. An empty or unknown value selects the first option.
    pub fn next_choice(&self, current: &str) -> Option<&'static str> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        let next = match options.iter().position(|o| *o == current) {
            Some(idx) => (idx + 1) % options.len(),
            None => 0,
        };
        options.get(next).copied()
    }

    /// The option before `current`, wrapping. An empty or unknown value selects the last option.
    pub fn prev_choice(&self, current: &str) -> Option<&'static str> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        let prev = match options.iter().position(|o| *o == current) {
            Some(0) | None => options.len().checked_sub(1)?,
            Some(idx) => idx - 1,
        };
        options.get(prev).copied()
    }

    /// Get the display value for rendering
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Choice(_) if value.is_empty() => "◀ select ▶".to_string(),
            FieldKind::Choice(_) => format!("◀ {value} ▶"),
            FieldKind::Numeric => value.to_string(),
        }
    }
}
