use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contracts::{Contract, ContractStatus, LifecycleError};
use crate::scheduling::{generate_schedule, Frequency, ScheduleEntry};

/// One overdue contract found by [`reconcile_expiry`]: flip it to expired and, if a
/// unit is attached, release that unit to vacant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryTransition {
    pub contract_id: String,
    pub unit_id: Option<String>,
}

/// Find active contracts whose end date has passed.
///
/// This replaces a background scheduler: the caller runs it on every contract load
/// and applies the returned transitions. It is idempotent — an already-expired
/// contract produces nothing — and a missing unit reference does not block the
/// expiry of its contract.
pub fn reconcile_expiry(contracts: &[Contract], today: &NaiveDateTime) -> Vec<ExpiryTransition> {
    let transitions: Vec<ExpiryTransition> = contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active && c.end_date < *today)
        .map(|c| ExpiryTransition {
            contract_id: c.id.clone(),
            unit_id: c.unit_id.clone(),
        })
        .collect();
    if !transitions.is_empty() {
        info!(count = transitions.len(), "contracts due for expiry");
    }
    transitions
}

/// Operator-supplied terms for a renewal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalTerms {
    pub end_date: NaiveDateTime,
    pub total_rent: f64,
    pub payment_frequency: Frequency,
}

/// The full outcome of a renewal, for the caller to persist atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct Renewal {
    /// The old contract, archived as expired. Its schedule stays on record.
    pub closed: Contract,
    /// The new active contract, starting where the old one ended.
    pub renewed: Contract,
    /// Fresh payment schedule for the new term.
    pub schedule: Vec<ScheduleEntry>,
}

/// Renew a contract into a brand-new agreement rather than mutating the original.
///
/// Allowed from active or expired. The new contract starts at the old end date,
/// carries the security deposit over, resets the advance payment to zero and
/// re-occupies the unit. The historical contract is closed as expired, preserving
/// its schedules untouched.
pub fn plan_renewal(
    old: &Contract,
    new_id: impl Into<String>,
    terms: &RenewalTerms,
) -> Result<Renewal, LifecycleError> {
    if old.status == ContractStatus::Terminated {
        return Err(LifecycleError::InvalidTransition {
            action: "renew",
            status: old.status,
        });
    }
    let renewed = Contract::try_new(
        new_id,
        old.tenant_id.clone(),
        old.unit_id.clone(),
        old.end_date,
        terms.end_date,
        terms.total_rent,
        terms.payment_frequency,
        old.security_deposit,
        0.0,
    )?;
    let schedule = generate_schedule(
        &renewed.start_date,
        &renewed.end_date,
        renewed.payment_frequency,
        renewed.total_rent,
    );
    let mut closed = old.clone();
    closed.status = ContractStatus::Expired;
    info!(
        contract = %old.id,
        renewed = %renewed.id,
        installments = schedule.len(),
        "planned contract renewal"
    );
    Ok(Renewal {
        closed,
        renewed,
        schedule,
    })
}

/// Bring a terminated contract back to active.
///
/// The unit is re-occupied by the caller; settlement figures already recorded at
/// termination are deliberately left as they were.
pub fn restore(contract: &Contract) -> Result<Contract, LifecycleError> {
    if contract.status != ContractStatus::Terminated {
        return Err(LifecycleError::InvalidTransition {
            action: "restore",
            status: contract.status,
        });
    }
    let mut restored = contract.clone();
    restored.status = ContractStatus::Active;
    info!(contract = %contract.id, "contract restored to active");
    Ok(restored)
}
