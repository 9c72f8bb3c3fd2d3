//! Demande lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a demande in the approval workflow.
///
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
/// - Approved → Paid (record payment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandeStatus {
    /// Submitted and waiting for an admin decision.
    Pending,
    /// Approved, waiting for payment.
    Approved,
    /// Rejected by an admin (terminal).
    Rejected,
    /// Paid (terminal).
    Paid,
}

impl DemandeStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Returns true if moving to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved | Self::Rejected) | (Self::Approved, Self::Paid)
        )
    }

    /// Returns true if a payment may be recorded for the demande.
    #[must_use]
    pub fn is_payable(&self) -> bool {
        self.can_transition_to(Self::Paid)
    }
}

impl fmt::Display for DemandeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DemandeStatus::Pending, DemandeStatus::Approved, true)]
    #[case(DemandeStatus::Pending, DemandeStatus::Rejected, true)]
    #[case(DemandeStatus::Pending, DemandeStatus::Paid, false)]
    #[case(DemandeStatus::Approved, DemandeStatus::Paid, true)]
    #[case(DemandeStatus::Approved, DemandeStatus::Rejected, false)]
    #[case(DemandeStatus::Rejected, DemandeStatus::Approved, false)]
    #[case(DemandeStatus::Paid, DemandeStatus::Pending, false)]
    fn test_transitions(
        #[case] from: DemandeStatus,
        #[case] to: DemandeStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn test_only_approved_is_payable() {
        assert!(DemandeStatus::Approved.is_payable());
        assert!(!DemandeStatus::Pending.is_payable());
        assert!(!DemandeStatus::Rejected.is_payable());
        assert!(!DemandeStatus::Paid.is_payable());
    }

    #[test]
    fn test_parse_and_display() {
        for status in [
            DemandeStatus::Pending,
            DemandeStatus::Approved,
            DemandeStatus::Rejected,
            DemandeStatus::Paid,
        ] {
            assert_eq!(DemandeStatus::parse(status.as_str()), Some(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(DemandeStatus::parse("PAID"), Some(DemandeStatus::Paid));
        assert_eq!(DemandeStatus::parse("draft"), None);
    }
}
