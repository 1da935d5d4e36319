//! Loan officer attestation state

/// Whether an attestation is required and whether the officer confirmed it.
///
/// `confirmed` can only be true while `required` is true; every change to
/// the requirement goes through [`Attestation::reconcile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attestation {
    pub required: bool,
    pub confirmed: bool,
}

impl Attestation {
    /// Apply a freshly derived requirement. Dropping the requirement also
    /// drops any earlier confirmation.
    pub fn reconcile(&mut self, required: bool) {
        if self.required != required {
            tracing::debug!("attestation required: {required}");
        }
        self.required = required;
        if !required {
            self.confirmed = false;
        }
    }

    /// Set the confirmation flag. Returns false (and leaves the flag unset)
    /// when no attestation is required.
    pub fn set_confirmed(&mut self, confirmed: bool) -> bool {
        if !self.required {
            self.confirmed = false;
            return !confirmed;
        }
        self.confirmed = confirmed;
        true
    }

    /// Flip the confirmation flag if an attestation is required
    pub fn toggle(&mut self) -> bool {
        self.set_confirmed(!self.confirmed)
    }
}
