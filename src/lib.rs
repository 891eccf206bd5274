//! This is the documentation for ijara
//!
//! *Ijara* is the calculation core of a property rental record-keeper. It owns the
//! calendar arithmetic and financial scheduling logic, and nothing else: persistence,
//! transport and presentation live with the caller, which feeds plain data in and
//! applies the returned data back to its own store.
//!
//! The crate is organised leaf-first:
//!
//! - [`calendars`]: Gregorian ⇄ Hijri conversion through an integer day count, and
//!   lunar month arithmetic. Everything else builds on this.
//! - [`scheduling`]: expansion of an agreement's term into equal payment
//!   [`Obligation`](scheduling::Obligation)s, and regeneration that preserves
//!   payment history.
//! - [`contracts`]: the lease lifecycle (expiry, renewal, termination with
//!   prorated settlement, restore).
//! - [`allocation`]: distribution of realised net profit across partners by
//!   percentage claim, with over-allocation validation.

pub mod json;

pub mod calendars;
pub use calendars::{
    add_lunar_months, add_lunar_years, convert, from_day_count, ndt, to_day_count, try_ndt,
    Calendar, CalendarError, HijriDate,
};

pub mod scheduling;
pub use scheduling::{
    apply_advance, generate_schedule, plan_regeneration, Frequency, Obligation, ParentKind,
    ParentRef, PaymentStatus, RegenerationPlan, ScheduleEntry, ScheduleError,
};

pub mod contracts;
pub use contracts::{
    apply_termination, plan_renewal, reconcile_expiry, restore, settle_termination, Contract,
    ContractStatus, ExpiryTransition, LifecycleError, Renewal, RenewalTerms, Settlement,
    SettlementConfig, TerminationOutcome,
};

pub mod allocation;
pub use allocation::{
    allocate, validate_shares, DateRange, Expense, Partner, PartnerAllocation, PartnerShare,
    PropertyFilter, ShareError, UnitRef,
};
