use std::fmt;

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::json::JSON;
use crate::scheduling::Frequency;

/// Errors from contract construction and state transitions.
///
/// State transitions favour correctness over leniency: an action from the wrong
/// state is refused outright rather than coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifecycleError {
    #[error("contract end date {end} must be after start date {start}")]
    InvalidTerm {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("cannot {action} a {status} contract")]
    InvalidTransition {
        action: &'static str,
        status: ContractStatus,
    },
    #[error("termination blocked: outstanding dues {outstanding:.2} exceed the {tolerance:.2} tolerance")]
    TerminationBlocked { outstanding: f64, tolerance: f64 },
}

/// Lifecycle state of a [`Contract`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Expired,
    Terminated,
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContractStatus::Active => "active",
            ContractStatus::Expired => "expired",
            ContractStatus::Terminated => "terminated",
        };
        f.write_str(s)
    }
}

/// A lease-like agreement between a tenant and a unit for a fixed term.
///
/// `total_rent` covers the whole term and is divided across the payment schedule;
/// the caller enforces that at most one active contract exists per unit by flipping
/// the unit's occupancy flag on the transitions this module reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub tenant_id: String,
    pub unit_id: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub total_rent: f64,
    pub payment_frequency: Frequency,
    pub security_deposit: f64,
    /// Amount paid up front, consumed against the first installment when the
    /// schedule is first persisted (see [`crate::scheduling::apply_advance`]).
    pub advance_payment: f64,
    pub status: ContractStatus,
    pub condition_at_move_in: Option<String>,
    pub condition_at_move_out: Option<String>,
}

impl Contract {
    /// Create an active contract, validating that the term is non-empty.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        id: impl Into<String>,
        tenant_id: impl Into<String>,
        unit_id: Option<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        total_rent: f64,
        payment_frequency: Frequency,
        security_deposit: f64,
        advance_payment: f64,
    ) -> Result<Self, LifecycleError> {
        if end_date <= start_date {
            return Err(LifecycleError::InvalidTerm {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Contract {
            id: id.into(),
            tenant_id: tenant_id.into(),
            unit_id,
            start_date,
            end_date,
            total_rent,
            payment_frequency,
            security_deposit,
            advance_payment,
            status: ContractStatus::Active,
            condition_at_move_in: None,
            condition_at_move_out: None,
        })
    }

    /// Inclusive day count of the full term, by exact Gregorian subtraction.
    pub fn total_duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl JSON for Contract {}
