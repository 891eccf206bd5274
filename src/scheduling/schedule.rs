use std::collections::HashSet;

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendars::add_lunar_months;
use crate::json::JSON;
use crate::scheduling::{Frequency, Obligation, PaymentStatus};

/// One planned installment: a due date and the equal share of the total amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub due_date: NaiveDateTime,
    pub amount: f64,
}

impl JSON for ScheduleEntry {}

/// Expand an agreement term into equal installments on lunar-month boundaries.
///
/// Due dates start at `start` and advance by the frequency's lunar-month step; the
/// loop stops once a date reaches `end`, so no installment ever falls due on or
/// after the agreement's end. Each entry carries `total_amount / N` exactly — no
/// per-entry rounding is applied, the sub-unit discrepancy on the final settled
/// figure is accepted.
///
/// An `end` not after `start` produces an empty schedule; that is a valid outcome
/// of a zero-length term, not an error.
pub fn generate_schedule(
    start: &NaiveDateTime,
    end: &NaiveDateTime,
    frequency: Frequency,
    total_amount: f64,
) -> Vec<ScheduleEntry> {
    let step = frequency.step_months();
    let mut due_dates: Vec<NaiveDateTime> = vec![];
    let mut current = *start;
    while current < *end {
        due_dates.push(current);
        current = add_lunar_months(&current, step);
    }
    if due_dates.is_empty() {
        return vec![];
    }
    let amount = total_amount / due_dates.len() as f64;
    due_dates
        .into_iter()
        .map(|due_date| ScheduleEntry { due_date, amount })
        .collect()
}

/// The delta to apply when an agreement's terms change after entries were persisted.
///
/// `discard` holds ids of existing entries safe to delete; `create` holds the new
/// entries to persist. Everything else is left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegenerationPlan {
    pub discard: Vec<String>,
    pub create: Vec<ScheduleEntry>,
}

/// Plan the regeneration of a schedule against the entries already on record.
///
/// `existing` must be a consistent snapshot of the affected agreement's obligations
/// (the caller filters by parent and guards against concurrent regeneration).
/// Only unpaid entries are discarded — paid and partial entries are history and
/// survive. A proposed entry whose due date already has a surviving entry is
/// skipped, so editing terms without changing the schedule shape cannot double-bill
/// a period.
pub fn plan_regeneration(existing: &[Obligation], proposed: &[ScheduleEntry]) -> RegenerationPlan {
    let discard: Vec<String> = existing
        .iter()
        .filter(|o| o.status() == PaymentStatus::Unpaid)
        .map(|o| o.id.clone())
        .collect();
    let covered: HashSet<NaiveDateTime> = existing
        .iter()
        .filter(|o| o.status() != PaymentStatus::Unpaid)
        .map(|o| o.due_date)
        .collect();
    let create: Vec<ScheduleEntry> = proposed
        .iter()
        .filter(|e| !covered.contains(&e.due_date))
        .cloned()
        .collect();
    debug!(
        discarded = discard.len(),
        preserved = covered.len(),
        created = create.len(),
        "planned schedule regeneration"
    );
    RegenerationPlan { discard, create }
}

/// Consume an agreement's advance payment against the first installment.
///
/// Called once, when the freshly generated obligations are first persisted. At most
/// the first installment's own amount is applied, so a large advance never spills
/// into later periods; the surplus stays with the caller. Returns the amount
/// actually applied, zero when the advance is non-positive or the schedule empty.
pub fn apply_advance(obligations: &mut [Obligation], advance: f64) -> f64 {
    let first = match obligations.first_mut() {
        Some(first) if advance > 0.0 => first,
        _ => return 0.0,
    };
    let applied = advance.min(first.amount);
    first.paid_amount += applied;
    debug!(
        obligation = %first.id,
        applied,
        "applied advance payment to first installment"
    );
    applied
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;
    use crate::scheduling::ParentRef;

    #[test]
    fn test_generate_monthly_lunar_year() {
        // a full lunar year at monthly frequency is exactly 12 installments
        let schedule = generate_schedule(
            &ndt(2023, 7, 19), // 1 Muharram 1445
            &ndt(2024, 7, 8),  // 1 Muharram 1446
            Frequency::Monthly,
            12_000.0,
        );
        assert_eq!(12, schedule.len());
        assert_eq!(ndt(2023, 7, 19), schedule[0].due_date);
        for entry in schedule.iter() {
            assert_eq!(1000.0, entry.amount);
        }
    }

    #[test]
    fn test_generate_excludes_end_date() {
        for frequency in [
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::SemiAnnual,
            Frequency::Annual,
        ] {
            let start = ndt(2024, 2, 1);
            let end = ndt(2026, 2, 1);
            let schedule = generate_schedule(&start, &end, frequency, 24_000.0);
            assert!(!schedule.is_empty());
            for entry in schedule.iter() {
                assert!(entry.due_date >= start);
                assert!(entry.due_date < end);
            }
        }
    }

    #[test]
    fn test_generate_amounts_sum_to_total() {
        let total = 10_000.0;
        let schedule = generate_schedule(&ndt(2024, 1, 1), &ndt(2025, 1, 1), Frequency::Monthly, total);
        let sum: f64 = schedule.iter().map(|e| e.amount).sum();
        assert!((sum - total).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_generate_empty_for_inverted_range() {
        assert!(generate_schedule(&ndt(2024, 6, 1), &ndt(2024, 6, 1), Frequency::Monthly, 500.0).is_empty());
        assert!(generate_schedule(&ndt(2024, 6, 2), &ndt(2024, 6, 1), Frequency::Monthly, 500.0).is_empty());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let a = generate_schedule(&ndt(2023, 3, 1), &ndt(2024, 3, 1), Frequency::Quarterly, 8_000.0);
        let b = generate_schedule(&ndt(2023, 3, 1), &ndt(2024, 3, 1), Frequency::Quarterly, 8_000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_period_gets_full_amount() {
        // yearly frequency over a six-month term emits one entry carrying everything
        let schedule = generate_schedule(&ndt(2024, 1, 1), &ndt(2024, 7, 1), Frequency::Annual, 9_000.0);
        assert_eq!(1, schedule.len());
        assert_eq!(9_000.0, schedule[0].amount);
    }

    fn fixture_existing() -> Vec<Obligation> {
        let mut paid = Obligation::new("o-1", ParentRef::contract("c-1"), ndt(2024, 1, 1), 500.0);
        paid.paid_amount = 500.0;
        let mut partial = Obligation::new("o-2", ParentRef::contract("c-1"), ndt(2024, 4, 1), 500.0);
        partial.paid_amount = 100.0;
        let unpaid = Obligation::new("o-3", ParentRef::contract("c-1"), ndt(2024, 7, 1), 500.0);
        vec![paid, partial, unpaid]
    }

    #[test]
    fn test_regeneration_preserves_history() {
        let proposed = vec![
            ScheduleEntry { due_date: ndt(2024, 1, 1), amount: 700.0 },
            ScheduleEntry { due_date: ndt(2024, 4, 1), amount: 700.0 },
            ScheduleEntry { due_date: ndt(2024, 7, 1), amount: 700.0 },
            ScheduleEntry { due_date: ndt(2024, 10, 1), amount: 700.0 },
        ];
        let plan = plan_regeneration(&fixture_existing(), &proposed);
        // only the unpaid entry is dropped
        assert_eq!(vec!["o-3".to_string()], plan.discard);
        // paid/partial due dates are not re-billed
        assert_eq!(
            vec![ndt(2024, 7, 1), ndt(2024, 10, 1)],
            plan.create.iter().map(|e| e.due_date).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_apply_advance_to_first_installment() {
        let mut obligations = vec![
            Obligation::new("o-1", ParentRef::contract("c-1"), ndt(2024, 1, 1), 1_000.0),
            Obligation::new("o-2", ParentRef::contract("c-1"), ndt(2024, 2, 1), 1_000.0),
        ];
        // a partial advance flips the first installment to partial
        assert_eq!(400.0, apply_advance(&mut obligations, 400.0));
        assert_eq!(PaymentStatus::Partial, obligations[0].status());
        assert_eq!(400.0, obligations[0].paid_amount);
        assert_eq!(PaymentStatus::Unpaid, obligations[1].status());
    }

    #[test]
    fn test_apply_advance_caps_at_first_amount() {
        // the surplus over the first installment stays with the caller
        let mut obligations = vec![
            Obligation::new("o-1", ParentRef::contract("c-1"), ndt(2024, 1, 1), 1_000.0),
            Obligation::new("o-2", ParentRef::contract("c-1"), ndt(2024, 2, 1), 1_000.0),
        ];
        assert_eq!(1_000.0, apply_advance(&mut obligations, 2_500.0));
        assert_eq!(PaymentStatus::Paid, obligations[0].status());
        assert_eq!(0.0, obligations[1].paid_amount);
    }

    #[test]
    fn test_apply_advance_no_op_cases() {
        let mut obligations = vec![Obligation::new(
            "o-1",
            ParentRef::contract("c-1"),
            ndt(2024, 1, 1),
            1_000.0,
        )];
        assert_eq!(0.0, apply_advance(&mut obligations, 0.0));
        assert_eq!(0.0, apply_advance(&mut obligations, -100.0));
        assert_eq!(0.0, obligations[0].paid_amount);
        assert_eq!(0.0, apply_advance(&mut [], 500.0));
    }

    #[test]
    fn test_regeneration_with_no_existing_entries() {
        let proposed = generate_schedule(&ndt(2024, 1, 1), &ndt(2025, 1, 1), Frequency::SemiAnnual, 6_000.0);
        let plan = plan_regeneration(&[], &proposed);
        assert!(plan.discard.is_empty());
        assert_eq!(proposed, plan.create);
    }
}
