//! Application state definitions

use super::forms::{FieldId, PexForm};
use std::time::{Duration, Instant};

/// Output actions offered below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenEmail,
    CopyToClipboard,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenEmail => "✉ Open in Email",
            Self::CopyToClipboard => "📋 Copy to Clipboard",
        }
    }
}

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Attestation,
    Button(Action),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::LoanOfficer)
    }
}

impl Focus {
    /// Tab order for the current form. Net pricing is skipped and the
    /// attestation checkbox only appears while it is required.
    pub fn order(form: &PexForm) -> Vec<Focus> {
        let mut order = Vec::with_capacity(FieldId::ALL.len() + 3);
        for id in FieldId::ALL {
            if form.field(id).is_read_only() {
                continue;
            }
            order.push(Focus::Field(id));
            if id == FieldId::TotalPrice && form.attestation.required {
                order.push(Focus::Attestation);
            }
        }
        order.push(Focus::Button(Action::OpenEmail));
        order.push(Focus::Button(Action::CopyToClipboard));
        order
    }
}

/// Transient "Copied!" feedback on the copy button
#[derive(Debug, Clone, Copy)]
pub struct CopiedIndicator {
    pub shown_at: Instant,
}

impl CopiedIndicator {
    pub const DURATION: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self {
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DURATION
    }
}

impl Default for CopiedIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: PexForm,
    pub focus: Focus,
    pub copied: Option<CopiedIndicator>,
    /// Queue of errors waiting to be shown, oldest first
    pub errors: Vec<String>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        let order = Focus::order(&self.form);
        let next = match order.iter().position(|f| *f == self.focus) {
            Some(i) => (i + 1) % order.len(),
            None => 0,
        };
        self.focus = order[next];
    }

    pub fn prev_focus(&mut self) {
        let order = Focus::order(&self.form);
        let prev = match order.iter().position(|f| *f == self.focus) {
            Some(0) | None => order.len() - 1,
            Some(i) => i - 1,
        };
        self.focus = order[prev];
    }

    /// Move focus off the checkbox once it is no longer shown
    pub fn ensure_focus_visible(&mut self) {
        if self.focus == Focus::Attestation && !self.form.attestation.required {
            self.focus = Focus::Field(FieldId::TotalPrice);
        }
    }

    pub fn show_copied(&mut self) {
        self.copied = Some(CopiedIndicator::new());
    }

    pub fn is_copied_shown(&self) -> bool {
        self.copied.is_some_and(|c| !c.is_expired())
    }

    /// Clear the copied indicator once its time is up
    pub fn expire_copied(&mut self) {
        if self.copied.is_some_and(|c| c.is_expired()) {
            self.copied = None;
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }
}
