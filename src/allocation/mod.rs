//! Split realised property profit across ownership [`Partner`]s.
//!
//! Each partner holds percentage shares in individual properties. A property's
//! claims may never exceed 100% across all partners, checked by [`validate_shares`]
//! whenever a partner is created or edited, so [`allocate`] can assume the invariant
//! holds. Profit is realised cash for the window: payments received minus expenses
//! booked, computed per property and then split by share.
//!
//! ```rust
//! use ijara::allocation::{validate_shares, Partner, PartnerShare, ShareError};
//!
//! let partners = vec![Partner::new(
//!     "pa-1",
//!     "Alia",
//!     vec![PartnerShare { property_id: "p-1".to_string(), share_percentage: 60.0 }],
//! )];
//! // a second partner may claim at most the remaining 40%
//! let candidate = vec![PartnerShare { property_id: "p-1".to_string(), share_percentage: 70.0 }];
//! assert!(matches!(
//!     validate_shares(&partners, "pa-2", &candidate),
//!     Err(ShareError::OverAllocated { .. })
//! ));
//! ```

mod partner;
mod profit;

pub use crate::allocation::{
    partner::{validate_shares, Partner, PartnerShare, ShareError},
    profit::{allocate, DateRange, Expense, PartnerAllocation, PropertyFilter, UnitRef},
};
