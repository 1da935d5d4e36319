//! Derivation engine
//!
//! Pure functions that turn the raw form text into the pricing values shown
//! in the analysis panel and written into the report:
//! - `numeric`: lenient number parsing and rounding
//! - `analysis`: net pricing, Bps/dollar exception and severity tier
//! - `attestation`: the attestation requirement and its reset rule

mod analysis;
mod attestation;
mod numeric;

pub use analysis::{
    analyze, attestation_required, net_pricing, PricingAnalysis, SeverityTier,
    ATTESTATION_THRESHOLD,
};
pub use attestation::Attestation;
pub use numeric::{format_price, parse_number};

use crate::state::{FieldId, PexForm};

/// Re-derive every stored value after a form mutation.
///
/// Net pricing is only rewritten while at least one of its source fields
/// holds text, so clearing both leaves the last computed value in place.
/// The attestation requirement is re-evaluated afterwards and drops any
/// confirmation once it no longer applies.
pub fn recompute(form: &mut PexForm) {
    let total_price = form.value(FieldId::TotalPrice);
    let points = form.value(FieldId::BorrowerPaidPoints);

    if let Some(net) = net_pricing(total_price, points) {
        let formatted = format_price(net);
        if form.value(FieldId::NetPricing) != formatted {
            tracing::debug!("net pricing recomputed: {formatted}");
        }
        form.store_net_pricing(formatted);
    }

    let required = attestation_required(
        form.value(FieldId::TotalPrice),
        form.value(FieldId::BorrowerPaidPoints),
        form.value(FieldId::NetPricing),
    );
    form.attestation.reconcile(required);
}
