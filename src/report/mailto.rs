//! Email subject and mailto: URI

use crate::state::{FieldId, PexForm};

fn or_tag<'a>(value: &'a str, tag: &'a str) -> &'a str {
    if value.is_empty() {
        tag
    } else {
        value
    }
}

/// Single-line summary used as the email subject
pub fn email_subject(form: &PexForm) -> String {
    format!(
        "PEX Loan # {} | {} | NET Pricing {} | {}",
        or_tag(form.value(FieldId::LoanNumber), "[Loan #]"),
        or_tag(form.value(FieldId::BorrowerLastName), "[Borrower]"),
        or_tag(form.value(FieldId::NetPricing), "[NET]"),
        or_tag(form.value(FieldId::Product), "[Product]"),
    )
}

/// Build a `mailto:` link with a percent-encoded subject and body
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
