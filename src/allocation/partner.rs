use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::json::JSON;

/// A partner's percentage claim on a single property's profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerShare {
    pub property_id: String,
    /// Percentage in [0, 100]. A property's claims across all partners may sum
    /// to less than 100; the remainder is simply unallocated.
    pub share_percentage: f64,
}

/// An ownership partner and the per-property shares they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub shares: Vec<PartnerShare>,
}

impl Partner {
    pub fn new(id: impl Into<String>, name: impl Into<String>, shares: Vec<PartnerShare>) -> Self {
        Partner {
            id: id.into(),
            name: name.into(),
            shares,
        }
    }

    /// Drop zero and negative shares. Saving a share at 0% means relinquishing it.
    pub fn normalize(&mut self) {
        self.shares.retain(|s| s.share_percentage > 0.0);
    }

    pub fn share_for(&self, property_id: &str) -> f64 {
        self.shares
            .iter()
            .filter(|s| s.property_id == property_id)
            .map(|s| s.share_percentage)
            .sum()
    }
}

impl JSON for Partner {}

#[derive(Error, Debug, PartialEq)]
pub enum ShareError {
    #[error("share for property `{property_id}` must lie in [0, 100], got {share_percentage}")]
    InvalidPercentage {
        property_id: String,
        share_percentage: f64,
    },
    #[error("shares for property `{property_id}` would total {total}%, exceeding 100%")]
    OverAllocated { property_id: String, total: f64 },
}

/// Validate a partner's candidate shares against everyone else's.
///
/// `partner_id` names the partner being created or edited; their previously saved
/// shares are excluded so that reducing an existing share always passes. Checked at
/// edit time, before any allocation runs.
pub fn validate_shares(
    partners: &[Partner],
    partner_id: &str,
    candidate: &[PartnerShare],
) -> Result<(), ShareError> {
    for share in candidate {
        if !(0.0..=100.0).contains(&share.share_percentage) {
            return Err(ShareError::InvalidPercentage {
                property_id: share.property_id.clone(),
                share_percentage: share.share_percentage,
            });
        }
        let others: f64 = partners
            .iter()
            .filter(|p| p.id != partner_id)
            .map(|p| p.share_for(&share.property_id))
            .sum();
        let own: f64 = candidate
            .iter()
            .filter(|s| s.property_id == share.property_id)
            .map(|s| s.share_percentage)
            .sum();
        let total = others + own;
        if total > 100.0 + 1e-9 {
            return Err(ShareError::OverAllocated {
                property_id: share.property_id.clone(),
                total,
            });
        }
    }
    Ok(())
}
