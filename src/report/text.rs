//! Canonical report text

use super::number::format_grouped;
use crate::pricing::{parse_number, PricingAnalysis};
use crate::state::{FieldId, PexForm};
use chrono::{DateTime, Local};

/// Section separator, 42 heavy horizontal box-drawing characters
pub const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const NOT_PROVIDED: &str = "[Not Provided]";
const NOT_SELECTED: &str = "[Not Selected]";
const NO_NOTES: &str = "[No additional notes provided]";

/// Format a local time the way the report prints it: `M/D/YYYY, h:mm:ss AM`
pub fn submitted_timestamp(at: DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render the whole form into the text shared by the clipboard and email
/// actions.
///
/// The attestation notice is only included when the attestation is both
/// required and confirmed; otherwise the block is left out entirely.
pub fn render_report(
    form: &PexForm,
    analysis: &PricingAnalysis,
    attestation_confirmed: bool,
    submitted_at: &str,
) -> String {
    let text = |id| or_placeholder(form.value(id), NOT_PROVIDED);
    let choice = |id| or_placeholder(form.value(id), NOT_SELECTED);

    let loan_amount = match parse_number(form.value(FieldId::LoanAmount)) {
        Some(amount) => format!("${}", format_grouped(amount)),
        None => NOT_PROVIDED.to_string(),
    };
    let rate = match form.value(FieldId::Rate) {
        "" => NOT_PROVIDED.to_string(),
        rate => format!("{rate}%"),
    };

    let mut lines: Vec<String> = vec![
        "PRICING EXCEPTION REQUEST".into(),
        String::new(),
        RULE.into(),
        String::new(),
        "LOAN OFFICER INFORMATION".into(),
        RULE.into(),
        format!("Loan Officer: {}", text(FieldId::LoanOfficer)),
        format!("Loan Number: {}", text(FieldId::LoanNumber)),
        format!("Borrower Last Name: {}", text(FieldId::BorrowerLastName)),
        String::new(),
        "LOAN DETAILS".into(),
        RULE.into(),
        format!("Loan Purpose: {}", choice(FieldId::LoanPurpose)),
        format!("Product: {}", choice(FieldId::Product)),
        format!("Loan Amount: {loan_amount}"),
        format!("Rate: {rate}"),
        String::new(),
        "PRICING INFORMATION".into(),
        RULE.into(),
        format!("Borrower Paid Points: {}", text(FieldId::BorrowerPaidPoints)),
        format!("Total Price (Net before points): {}", text(FieldId::TotalPrice)),
        format!("Net Pricing: {}", text(FieldId::NetPricing)),
    ];

    if analysis.attestation_required && attestation_confirmed {
        lines.push(String::new());
        lines.push("⚠️ ATTESTATION REQUIRED".into());
        lines.push("Loan Officer Attestation will be uploaded to BlueSage".into());
    }

    lines.extend([
        String::new(),
        "PRICING EXCEPTION ANALYSIS".into(),
        RULE.into(),
        format!("Total Pricing Exception (Bps): {:.2}", analysis.bps),
        format!(
            "Total Pricing Exception ($): ${}",
            format_grouped(analysis.dollars)
        ),
        String::new(),
        "COMPETITIVE INFORMATION".into(),
        RULE.into(),
        format!("Competitor: {}", text(FieldId::Competitor)),
        format!("Branch Source Code: {}", choice(FieldId::BranchSource)),
        String::new(),
        "PEX NOTES".into(),
        RULE.into(),
        or_placeholder(form.value(FieldId::PexNote), NO_NOTES).into(),
        String::new(),
        RULE.into(),
        format!("Submitted: {submitted_at}"),
    ]);

    lines.join("\n")
}
