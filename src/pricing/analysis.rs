//! Pricing exception analysis

use super::numeric::{parse_number, round2};
use crate::state::{FieldId, PexForm};

/// Par price that exceptions are measured against
pub const PAR: f64 = 100.0;

/// Net pricing below this value requires a loan officer attestation
pub const ATTESTATION_THRESHOLD: f64 = 99.5;

/// Visual severity of a pricing exception
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Good,
    Warn,
    Bad,
}

impl SeverityTier {
    /// Classify an exception in basis points. Checked top-down with
    /// inclusive lower bounds: `>= -0.50` is good, `>= -0.75` is warn.
    pub fn from_bps(bps: f64) -> Self {
        if bps >= -0.50 {
            Self::Good
        } else if bps >= -0.75 {
            Self::Warn
        } else {
            Self::Bad
        }
    }
}

/// Total pricing exception in basis points and dollars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exception {
    pub bps: f64,
    pub dollars: f64,
}

/// Everything the form derives from its raw inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingAnalysis {
    /// Stored net pricing, `None` while nothing has been computed yet
    pub net_pricing: Option<f64>,
    pub bps: f64,
    pub dollars: f64,
    pub tier: SeverityTier,
    pub attestation_required: bool,
}

/// Sum of total price and borrower paid points.
///
/// Returns `None` when both inputs are empty so the caller can leave the
/// stored value alone. Unparsable input counts as zero.
pub fn net_pricing(total_price: &str, borrower_paid_points: &str) -> Option<f64> {
    if total_price.is_empty() && borrower_paid_points.is_empty() {
        return None;
    }
    let total = parse_number(total_price).unwrap_or(0.0);
    let points = parse_number(borrower_paid_points).unwrap_or(0.0);
    Some(round2(total + points))
}

/// Bps = NetPricing - 100, Dollars = (Bps / 100) * LoanAmount
pub fn exception(net_pricing: f64, loan_amount: f64) -> Exception {
    let bps = round2(net_pricing - PAR);
    let dollars = round2(bps / 100.0 * loan_amount);
    Exception { bps, dollars }
}

/// Attestation applies once both price inputs are filled in and the stored
/// net pricing is below [`ATTESTATION_THRESHOLD`].
pub fn attestation_required(total_price: &str, borrower_paid_points: &str, net: &str) -> bool {
    if total_price.is_empty() || borrower_paid_points.is_empty() {
        return false;
    }
    parse_number(net).is_some_and(|net| net < ATTESTATION_THRESHOLD)
}

/// Derive the full analysis from the current form contents
pub fn analyze(form: &PexForm) -> PricingAnalysis {
    let net = parse_number(form.value(FieldId::NetPricing));
    let loan_amount = parse_number(form.value(FieldId::LoanAmount)).unwrap_or(0.0);
    let Exception { bps, dollars } = exception(net.unwrap_or(0.0), loan_amount);

    PricingAnalysis {
        net_pricing: net,
        bps,
        dollars,
        tier: SeverityTier::from_bps(bps),
        attestation_required: attestation_required(
            form.value(FieldId::TotalPrice),
            form.value(FieldId::BorrowerPaidPoints),
            form.value(FieldId::NetPricing),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod severity_tier {
        use super::*;

        #[test]
        fn test_good_boundary_is_inclusive() {
            assert_eq!(SeverityTier::from_bps(-0.50), SeverityTier::Good);
            assert_eq!(SeverityTier::from_bps(0.0), SeverityTier::Good);
            assert_eq!(SeverityTier::from_bps(1.25), SeverityTier::Good);
        }

        #[test]
        fn test_warn_range() {
            assert_eq!(SeverityTier::from_bps(-0.50001), SeverityTier::Warn);
            assert_eq!(SeverityTier::from_bps(-0.6), SeverityTier::Warn);
            assert_eq!(SeverityTier::from_bps(-0.75), SeverityTier::Warn);
        }

        #[test]
        fn test_bad_below_warn() {
            assert_eq!(SeverityTier::from_bps(-0.75001), SeverityTier::Bad);
            assert_eq!(SeverityTier::from_bps(-100.0), SeverityTier::Bad);
        }
    }

    mod exception_formula {
        use super::*;

        #[test]
        fn test_unset_inputs_default_to_minus_one_hundred() {
            let result = exception(0.0, 0.0);
            assert_eq!(result.bps, -100.0);
            assert_eq!(result.dollars, 0.0);
        }

        #[test]
        fn test_zero_loan_amount_gives_zero_dollars() {
            assert_eq!(exception(97.5, 0.0).dollars, 0.0);
        }

        #[test]
        fn test_dollars_follow_rounded_bps() {
            let result = exception(99.25, 450_000.0);
            assert_eq!(result.bps, -0.75);
            assert_eq!(result.dollars, -3375.0);
        }

        #[test]
        fn test_above_par() {
            let result = exception(100.5, 200_000.0);
            assert_eq!(result.bps, 0.5);
            assert_eq!(result.dollars, 1000.0);
        }
    }

    mod net_pricing_sum {
        use super::*;

        #[test]
        fn test_both_empty_is_none() {
            assert_eq!(net_pricing("", ""), None);
        }

        #[test]
        fn test_one_side_empty_counts_as_zero() {
            assert_eq!(net_pricing("", "5"), Some(5.0));
            assert_eq!(net_pricing("98.5", ""), Some(98.5));
        }

        #[test]
        fn test_garbage_counts_as_zero() {
            assert_eq!(net_pricing("-", "1"), Some(1.0));
        }
    }

    mod attestation_rule {
        use super::*;

        #[test]
        fn test_requires_both_sources() {
            assert!(!attestation_required("", "5", "5.00"));
            assert!(!attestation_required("90", "", "90.00"));
        }

        #[test]
        fn test_threshold_is_exclusive() {
            assert!(attestation_required("99", "0.49", "99.49"));
            assert!(!attestation_required("99", "0.5", "99.50"));
        }

        #[test]
        fn test_unparsable_net_is_not_required() {
            assert!(!attestation_required("90", "5", ""));
        }
    }

    #[test]
    fn test_end_to_end_analysis() {
        let mut form = PexForm::new();
        form.set_value(FieldId::TotalPrice, "98.00");
        form.set_value(FieldId::BorrowerPaidPoints, "1.00");
        form.set_value(FieldId::LoanAmount, "300000");

        let analysis = analyze(&form);
        assert_eq!(form.value(FieldId::NetPricing), "99.00");
        assert_eq!(analysis.net_pricing, Some(99.0));
        assert_eq!(analysis.bps, -1.0);
        assert_eq!(analysis.dollars, -3000.0);
        assert_eq!(analysis.tier, SeverityTier::Bad);
        assert!(analysis.attestation_required);
    }

    #[test]
    fn test_empty_form_analysis() {
        let analysis = analyze(&PexForm::new());
        assert_eq!(analysis.net_pricing, None);
        assert_eq!(analysis.bps, -100.0);
        assert_eq!(analysis.dollars, 0.0);
        assert_eq!(analysis.tier, SeverityTier::Bad);
        assert!(!analysis.attestation_required);
    }
}
