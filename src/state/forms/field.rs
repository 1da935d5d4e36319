//! Form field value objects

use super::form_state::FieldId;

/// How a text field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free single-line text
    Text,
    /// Number-like input (digits, sign, decimal point, exponent)
    Numeric,
    /// Free text that may span lines
    Multiline,
    /// Written by the derivation engine only
    Derived,
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed list of literals, or nothing selected
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    /// Shown while the field is empty
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(id: FieldId, label: &'static str, placeholder: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            placeholder,
            kind,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(
        id: FieldId,
        label: &'static str,
        placeholder: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            placeholder,
            kind: FieldKind::Text,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
        }
    }

    /// Raw text value. Choice fields yield the selected literal or "".
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_read_only(&self) -> bool {
        self.kind == FieldKind::Derived
    }

    /// Whether typing `c` into this field should be accepted
    pub fn accepts(&self, c: char) -> bool {
        if self.is_choice() {
            return false;
        }
        match self.kind {
            FieldKind::Derived => false,
            FieldKind::Numeric => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            FieldKind::Multiline => c == '\n' || !c.is_control(),
            FieldKind::Text => !c.is_control(),
        }
    }

    /// Push a character to the field value. Returns true if it was accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Choice { .. } => false,
        }
    }

    /// Remove the last character (or the selection of a choice field)
    pub fn pop_char(&mut self) -> bool {
        if self.is_read_only() {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Choice { selected, .. } => selected.take().is_some(),
        }
    }

    /// Replace the value. Choice fields accept one of their literals or ""
    /// to clear the selection; anything else is rejected.
    pub fn set_text(&mut self, value: &str) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                if s == value {
                    return false;
                }
                *s = value.to_string();
                true
            }
            FieldValue::Choice { options, selected } => {
                let next = if value.is_empty() {
                    None
                } else {
                    match options.iter().position(|o| *o == value) {
                        Some(i) => Some(i),
                        None => return false,
                    }
                };
                let changed = *selected != next;
                *selected = next;
                changed
            }
        }
    }

    /// Step the selection of a choice field, wrapping through "no selection"
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let FieldValue::Choice { options, selected } = &mut self.value else {
            return false;
        };
        let count = options.len();
        if count == 0 {
            return false;
        }
        *selected = match (*selected, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        true
    }

    /// Get the display value for rendering (placeholder when empty)
    pub fn display_value(&self) -> &str {
        let value = self.as_text();
        if value.is_empty() {
            self.placeholder
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: &[&str] = &["Internal", "External", "N/A"];

    fn numeric() -> FormField {
        FormField::text(FieldId::Rate, "Rate (%)", "e.g., 6.750", FieldKind::Numeric)
    }

    fn branch() -> FormField {
        FormField::choice(FieldId::BranchSource, "Branch Source Code", "Select source...", SOURCES)
    }

    #[test]
    fn test_numeric_filters_characters() {
        let mut field = numeric();
        for c in "6.7a5x0".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "6.750");
        assert!(field.push_char('-'));
        assert!(field.push_char('e'));
        assert!(!field.push_char(' '));
    }

    #[test]
    fn test_text_accepts_spaces_but_not_newlines() {
        let mut field = FormField::text(FieldId::Competitor, "Competitor", "", FieldKind::Text);
        assert!(field.push_char(' '));
        assert!(!field.push_char('\n'));
    }

    #[test]
    fn test_multiline_accepts_newlines() {
        let mut field = FormField::text(FieldId::PexNote, "PEX Notes", "", FieldKind::Multiline);
        assert!(field.push_char('a'));
        assert!(field.push_char('\n'));
        assert!(field.push_char('b'));
        assert_eq!(field.as_text(), "a\nb");
        assert!(field.is_multiline());
    }

    #[test]
    fn test_derived_rejects_edits() {
        let mut field = FormField::text(FieldId::NetPricing, "Net Pricing", "", FieldKind::Derived);
        assert!(!field.push_char('9'));
        assert!(!field.pop_char());
        assert!(field.is_read_only());
    }

    #[test]
    fn test_pop_char() {
        let mut field = numeric();
        field.set_text("6.5");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "6.");
        let mut empty = numeric();
        assert!(!empty.pop_char());
    }

    #[test]
    fn test_choice_cycles_through_none() {
        let mut field = branch();
        assert_eq!(field.as_text(), "");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "Internal");
        field.cycle_choice(true);
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "N/A");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "");
        field.cycle_choice(false);
        assert_eq!(field.as_text(), "N/A");
    }

    #[test]
    fn test_choice_set_text() {
        let mut field = branch();
        assert!(field.set_text("External"));
        assert_eq!(field.as_text(), "External");
        assert!(!field.set_text("Somewhere"));
        assert_eq!(field.as_text(), "External");
        assert!(field.set_text(""));
        assert!(field.is_empty());
    }

    #[test]
    fn test_choice_rejects_typing_and_pop_clears() {
        let mut field = branch();
        assert!(!field.push_char('I'));
        field.cycle_choice(true);
        assert!(field.pop_char());
        assert!(field.is_empty());
    }

    #[test]
    fn test_display_value_uses_placeholder() {
        let mut field = numeric();
        assert_eq!(field.display_value(), "e.g., 6.750");
        field.set_text("7");
        assert_eq!(field.display_value(), "7");
    }
}
