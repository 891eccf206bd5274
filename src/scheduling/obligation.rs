use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::json::JSON;

/// Errors from schedule and payment operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("'{name}' is not a recognised payment frequency")]
    UnknownFrequency { name: String },
    #[error("a recorded payment must be positive, got {amount}")]
    NonPositivePayment { amount: f64 },
}

/// The kind of agreement an [`Obligation`] belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    /// A tenant rent invoice, parented by a contract.
    Contract,
    /// An owner lease payment, parented by a leased property.
    Property,
}

/// Reference to the agreement an obligation was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentRef {
    pub kind: ParentKind,
    pub id: String,
}

impl ParentRef {
    pub fn contract(id: impl Into<String>) -> Self {
        ParentRef {
            kind: ParentKind::Contract,
            id: id.into(),
        }
    }

    pub fn property(id: impl Into<String>) -> Self {
        ParentRef {
            kind: ParentKind::Property,
            id: id.into(),
        }
    }
}

/// Payment state of an obligation, always derived from its amounts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

/// A single due-date installment of a recurring payment plan.
///
/// One shape serves both business concepts (tenant rent and owner lease rent);
/// the [`ParentRef`] distinguishes them. Status is never stored: it is a pure
/// function of `paid_amount` against `amount`, so it cannot drift from the figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obligation {
    pub id: String,
    pub parent: ParentRef,
    /// Calendar day the installment falls due, stored Gregorian for interchange.
    pub due_date: NaiveDateTime,
    pub amount: f64,
    pub paid_amount: f64,
}

impl Obligation {
    pub fn new(id: impl Into<String>, parent: ParentRef, due_date: NaiveDateTime, amount: f64) -> Self {
        Obligation {
            id: id.into(),
            parent,
            due_date,
            amount,
            paid_amount: 0.0,
        }
    }

    /// Derived payment status.
    pub fn status(&self) -> PaymentStatus {
        if self.paid_amount >= self.amount {
            PaymentStatus::Paid
        } else if self.paid_amount > 0.0 {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Unpaid
        }
    }

    /// Amount still owed. Negative when overpaid.
    pub fn balance(&self) -> f64 {
        self.amount - self.paid_amount
    }

    /// Record a payment against this installment.
    ///
    /// `paid_amount` only ever increases; a payment can therefore never be undone
    /// through this type. Overpayment is accepted and simply reports [`PaymentStatus::Paid`].
    pub fn record_payment(&mut self, amount: f64) -> Result<PaymentStatus, ScheduleError> {
        if amount <= 0.0 {
            return Err(ScheduleError::NonPositivePayment { amount });
        }
        self.paid_amount += amount;
        Ok(self.status())
    }
}

impl JSON for Obligation {}
