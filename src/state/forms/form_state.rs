//! The pricing exception form and its field catalogue

use super::field::{FieldKind, FormField};
use crate::pricing::{self, Attestation};

pub const LOAN_PURPOSES: &[&str] = &["Purchase", "Refinance", "Renovation", "HELOC/2nds"];

pub const PRODUCTS: &[&str] = &[
    "CONF 30 Yr",
    "CONF 15 Yr",
    "CONF 30 Yr HB",
    "CONF 15 Yr HB",
    "FHA 30 Yr",
    "FHA 15 Yr",
    "FHA 30 Yr HB",
    "FHA 15 Yr HB",
    "VA 30 Yr",
    "VA 15 Yr",
    "VA 30 Yr HB",
    "VA 15 Yr HB",
];

pub const BRANCH_SOURCES: &[&str] = &["Internal", "External", "N/A"];

/// Identifies a field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    LoanOfficer,
    LoanNumber,
    BorrowerLastName,
    LoanPurpose,
    Product,
    LoanAmount,
    Rate,
    BorrowerPaidPoints,
    TotalPrice,
    NetPricing,
    Competitor,
    BranchSource,
    PexNote,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 13] = [
        FieldId::LoanOfficer,
        FieldId::LoanNumber,
        FieldId::BorrowerLastName,
        FieldId::LoanPurpose,
        FieldId::Product,
        FieldId::LoanAmount,
        FieldId::Rate,
        FieldId::BorrowerPaidPoints,
        FieldId::TotalPrice,
        FieldId::NetPricing,
        FieldId::Competitor,
        FieldId::BranchSource,
        FieldId::PexNote,
    ];

    /// Stable identifier used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::LoanOfficer => "loanOfficer",
            Self::LoanNumber => "loanNumber",
            Self::BorrowerLastName => "borrowerLastName",
            Self::LoanPurpose => "loanPurpose",
            Self::Product => "product",
            Self::LoanAmount => "loanAmount",
            Self::Rate => "rate",
            Self::BorrowerPaidPoints => "borrowerPaidPoints",
            Self::TotalPrice => "totalPrice",
            Self::NetPricing => "netPricing",
            Self::Competitor => "competitor",
            Self::BranchSource => "branchSource",
            Self::PexNote => "pexNote",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn build(self) -> FormField {
        use FieldKind::*;
        match self {
            Self::LoanOfficer => {
                FormField::text(self, "Loan Officer Name", "Enter loan officer name", Text)
            }
            Self::LoanNumber => FormField::text(self, "Loan Number", "Enter loan number", Text),
            Self::BorrowerLastName => FormField::text(
                self,
                "Borrower Last Name",
                "Enter borrower last name",
                Text,
            ),
            Self::LoanPurpose => {
                FormField::choice(self, "Loan Purpose", "Select purpose...", LOAN_PURPOSES)
            }
            Self::Product => FormField::choice(self, "Product", "Select product...", PRODUCTS),
            Self::LoanAmount => FormField::text(self, "Loan Amount", "Enter loan amount", Numeric),
            Self::Rate => FormField::text(self, "Rate (%)", "e.g., 6.750", Numeric),
            Self::BorrowerPaidPoints => {
                FormField::text(self, "Borrower Paid Points", "e.g., 1.00", Numeric)
            }
            Self::TotalPrice => FormField::text(
                self,
                "Total Price (Net before points to borrower)",
                "e.g., 98.00",
                Numeric,
            ),
            Self::NetPricing => FormField::text(
                self,
                "Net Pricing (Auto-Calculated)",
                "Calculated automatically",
                Derived,
            ),
            Self::Competitor => FormField::text(self, "Competitor", "Enter competitor name", Text),
            Self::BranchSource => FormField::choice(
                self,
                "Branch Source Code",
                "Select source...",
                BRANCH_SOURCES,
            ),
            Self::PexNote => FormField::text(
                self,
                "PEX Notes",
                "Enter notes on what you're competing against and matching...",
                Multiline,
            ),
        }
    }
}

/// Raw form contents plus the attestation state.
///
/// Every mutation that changes a value re-runs the derivation engine, so
/// net pricing and the attestation requirement are always current.
#[derive(Debug, Clone)]
pub struct PexForm {
    fields: Vec<FormField>,
    pub attestation: Attestation,
}

impl PexForm {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.iter().map(|id| id.build()).collect(),
            attestation: Attestation::default(),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    /// Raw text of a field ("" when empty or unselected)
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).as_text()
    }

    /// Replace a field's value. Net pricing cannot be set directly.
    pub fn set_value(&mut self, id: FieldId, value: &str) -> bool {
        self.mutate(id, |field| field.set_text(value))
    }

    pub fn push_char(&mut self, id: FieldId, c: char) -> bool {
        self.mutate(id, |field| field.push_char(c))
    }

    pub fn pop_char(&mut self, id: FieldId) -> bool {
        self.mutate(id, |field| field.pop_char())
    }

    pub fn cycle_choice(&mut self, id: FieldId, forward: bool) -> bool {
        self.mutate(id, |field| field.cycle_choice(forward))
    }

    pub fn toggle_attestation(&mut self) -> bool {
        self.attestation.toggle()
    }

    /// Written by the derivation engine only
    pub(crate) fn store_net_pricing(&mut self, value: String) {
        self.fields[FieldId::NetPricing.index()].value = super::field::FieldValue::Text(value);
    }

    fn mutate(&mut self, id: FieldId, edit: impl FnOnce(&mut FormField) -> bool) -> bool {
        if self.field(id).is_read_only() {
            return false;
        }
        let edited = &mut self.fields[id.index()];
        let changed = edit(edited);
        if changed {
            tracing::trace!(field = edited.id.key(), "field changed");
            pricing::recompute(self);
        }
        changed
    }
}

impl Default for PexForm {
    fn default() -> Self {
        Self::new()
    }
}
