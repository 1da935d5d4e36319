//! Report formatting
//!
//! Both output actions share one canonical text rendering of the form:
//! - `text`: the multi-line report and its timestamp
//! - `mailto`: email subject line and `mailto:` URI
//! - `number`: en-US style grouped number formatting

mod mailto;
mod number;
mod text;

pub use mailto::{email_subject, mailto_uri};
pub use number::format_grouped;
pub use text::{render_report, submitted_timestamp};

use crate::pricing::{analyze, PricingAnalysis};
use crate::state::PexForm;

/// A fully rendered request, ready for the clipboard or the mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub body: String,
}

impl Report {
    /// Render the current form, stamping it with `submitted_at`
    pub fn build(form: &PexForm, submitted_at: &str) -> Self {
        let analysis: PricingAnalysis = analyze(form);
        Self {
            subject: email_subject(form),
            body: render_report(form, &analysis, form.attestation.confirmed, submitted_at),
        }
    }

    pub fn mailto(&self, recipient: &str) -> String {
        mailto_uri(recipient, &self.subject, &self.body)
    }
}
