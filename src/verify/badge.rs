//! Verification badge

use std::fmt;

use crate::api::VerificationResult;

/// Outcome of a verification, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
    Verified,
    Mismatch,
    Unverified,
}

impl BadgeStatus {
    /// Classify a verification result
    ///
    /// A failed verification only counts as a mismatch when the backend gave a reason.
    pub fn from_result(result: &VerificationResult) -> Self {
        if result.verified {
            return BadgeStatus::Verified;
        }

        match result.mismatch_reason.as_deref() {
            Some(reason) if !reason.is_empty() => BadgeStatus::Mismatch,
            _ => BadgeStatus::Unverified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BadgeStatus::Verified => "Verified ✅",
            BadgeStatus::Mismatch => "Mismatch ⚠️",
            BadgeStatus::Unverified => "Not Verified ❌",
        }
    }
}

impl fmt::Display for BadgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
