//! Expand an agreement's term into payment [`Obligation`]s and keep schedules consistent
//! under edits.
//!
//! A schedule is generated by stepping lunar months (see [`crate::calendars`]) from the
//! agreement's start date up to, and strictly excluding, its end date, then dividing the
//! total amount equally across the emitted entries. Tenant rent invoices and owner lease
//! payments share the single [`Obligation`] shape, distinguished by [`ParentKind`], so
//! generation and status derivation are written once.
//!
//! ```rust
//! # use ijara::scheduling::{generate_schedule, Frequency};
//! # use ijara::calendars::ndt;
//! let schedule = generate_schedule(
//!     &ndt(2023, 7, 19),            // start, 1 Muharram 1445
//!     &ndt(2024, 7, 8),             // end, 1 Muharram 1446 (excluded)
//!     Frequency::Quarterly,
//!     12_000.0,
//! );
//! assert_eq!(4, schedule.len());
//! assert_eq!(3_000.0, schedule[0].amount);
//! ```
//!
//! Regeneration after a term edit is planned with [`plan_regeneration`]: only unpaid
//! entries are discarded, paid and partial entries survive as history, and no new entry
//! is created on a due date already covered by a surviving one. An agreement's advance
//! payment is consumed against the first installment with [`apply_advance`] when the
//! schedule is first persisted.

mod frequency;
mod obligation;
mod schedule;

pub use crate::scheduling::{
    frequency::Frequency,
    obligation::{Obligation, ParentKind, ParentRef, PaymentStatus, ScheduleError},
    schedule::{apply_advance, generate_schedule, plan_regeneration, RegenerationPlan, ScheduleEntry},
};
