use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::contracts::{Contract, ContractStatus, LifecycleError};
use crate::json::JSON;
use crate::scheduling::{Obligation, ParentKind};

/// Tunables for termination settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Outstanding dues up to this amount do not block termination; the margin
    /// absorbs the sub-unit rounding noise of equal-division schedules.
    pub outstanding_tolerance: f64,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        SettlementConfig {
            outstanding_tolerance: 5.0,
        }
    }
}

/// The settlement figures presented to the operator before a termination is confirmed.
///
/// Computed, never thrown: a shortfall is reported through `blocked` rather than an
/// error, and the caller surfaces it as a refusal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Inclusive day count of the full contracted term.
    pub total_days: i64,
    /// Inclusive day count actually served, capped at the contract end.
    pub served_days: i64,
    /// served / total, clamped to [0, 1].
    pub ratio: f64,
    /// Prorated rent owed for the served portion.
    pub rent_due: f64,
    /// Sum of payments recorded across the contract's obligations.
    pub total_paid: f64,
    /// rent_due − total_paid. Negative means the tenant overpaid.
    pub outstanding: f64,
    /// Whether the outstanding amount exceeds the configured tolerance.
    pub blocked: bool,
    pub deposit: f64,
    /// deposit − outstanding; negative when the deposit does not cover the shortfall.
    pub refund: f64,
}

/// Price an early termination by exact-day proration.
///
/// Day counts use Gregorian calendar-day subtraction, inclusive of both endpoints —
/// the lunar calendar drives schedules, not settlement. Obligations not belonging to
/// the contract are ignored, so the caller may pass an unfiltered snapshot.
pub fn settle_termination(
    contract: &Contract,
    obligations: &[Obligation],
    today: &NaiveDateTime,
    config: &SettlementConfig,
) -> Settlement {
    let total_days = contract.total_duration_days();
    let effective_end = (*today).min(contract.end_date);
    let served_days = (effective_end - contract.start_date).num_days() + 1;
    let ratio = (served_days as f64 / total_days as f64).clamp(0.0, 1.0);
    let rent_due = contract.total_rent * ratio;
    let total_paid: f64 = obligations
        .iter()
        .filter(|o| o.parent.kind == ParentKind::Contract && o.parent.id == contract.id)
        .map(|o| o.paid_amount)
        .sum();
    let outstanding = rent_due - total_paid;
    let blocked = outstanding > config.outstanding_tolerance;
    if blocked {
        warn!(
            contract = %contract.id,
            outstanding,
            "termination blocked by outstanding dues"
        );
    }
    Settlement {
        total_days,
        served_days,
        ratio,
        rent_due,
        total_paid,
        outstanding,
        blocked,
        deposit: contract.security_deposit,
        refund: contract.security_deposit - outstanding,
    }
}

impl JSON for Settlement {}

/// The result of a confirmed termination, for the caller to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminationOutcome {
    /// The contract flipped to terminated, with the move-out condition recorded.
    pub terminated: Contract,
    /// Unit to release to vacant, when one is attached.
    pub unit_to_vacate: Option<String>,
    /// The refund presented at confirmation, repeated for the caller's records.
    pub refund: f64,
}

/// Confirm a termination against its computed [`Settlement`].
///
/// Refused while the settlement is blocked or the contract is already terminated.
/// No obligation records are deleted or modified — the schedule remains history.
pub fn apply_termination(
    contract: &Contract,
    settlement: &Settlement,
    condition_at_move_out: impl Into<String>,
    config: &SettlementConfig,
) -> Result<TerminationOutcome, LifecycleError> {
    if contract.status == ContractStatus::Terminated {
        return Err(LifecycleError::InvalidTransition {
            action: "terminate",
            status: contract.status,
        });
    }
    if settlement.blocked {
        return Err(LifecycleError::TerminationBlocked {
            outstanding: settlement.outstanding,
            tolerance: config.outstanding_tolerance,
        });
    }
    let mut terminated = contract.clone();
    terminated.status = ContractStatus::Terminated;
    terminated.condition_at_move_out = Some(condition_at_move_out.into());
    info!(
        contract = %contract.id,
        refund = settlement.refund,
        "contract terminated"
    );
    Ok(TerminationOutcome {
        unit_to_vacate: terminated.unit_id.clone(),
        terminated,
        refund: settlement.refund,
    })
}
