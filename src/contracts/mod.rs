//! Drive a lease [`Contract`] through its lifecycle and settle early terminations.
//!
//! A contract is created active, expires automatically once the wall-clock date passes
//! its end date, and can be renewed or terminated by explicit operator action. Every
//! transition here is computed as plain data for the caller to apply — this module never
//! mutates a store and never decides *when* to run.
//!
//! # Expiry
//!
//! There is no background scheduler: [`reconcile_expiry`] is an idempotent sweep the
//! caller invokes whenever it loads contracts, returning the transitions (contract to
//! expire, unit to release) that are due. Running it twice is harmless.
//!
//! # Renewal
//!
//! [`plan_renewal`] closes the old contract as expired and produces a brand-new active
//! contract starting at the old end date, with a fresh payment schedule for the new
//! term. The old contract and its schedule are preserved as history.
//!
//! # Termination
//!
//! [`settle_termination`] prices an early exit by exact-day proration:
//!
//! ```rust
//! # use ijara::contracts::{settle_termination, Contract, SettlementConfig};
//! # use ijara::scheduling::Frequency;
//! # use ijara::calendars::ndt;
//! # let contract = Contract::try_new(
//! #     "c-1", "t-1", Some("u-1".to_string()),
//! #     ndt(2023, 1, 1), ndt(2023, 12, 31),
//! #     12_000.0, Frequency::Quarterly, 2_000.0, 0.0,
//! # ).unwrap();
//! let s = settle_termination(&contract, &[], &ndt(2023, 7, 2), &SettlementConfig::default());
//! assert_eq!(183, s.served_days);
//! assert!(s.blocked); // nothing was paid, the prorated rent is outstanding
//! ```
//!
//! Settlement never errors; a shortfall beyond the configured tolerance sets the
//! `blocked` flag and [`apply_termination`] refuses to proceed until it clears.

mod contract;
mod lifecycle;
mod settlement;

pub use crate::contracts::{
    contract::{Contract, ContractStatus, LifecycleError},
    lifecycle::{plan_renewal, reconcile_expiry, restore, ExpiryTransition, Renewal, RenewalTerms},
    settlement::{apply_termination, settle_termination, Settlement, SettlementConfig, TerminationOutcome},
};
