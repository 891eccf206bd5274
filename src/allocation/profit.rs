use chrono::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::allocation::Partner;
use crate::contracts::Contract;
use crate::json::JSON;
use crate::scheduling::{Obligation, ParentKind};

/// A rentable unit and the property it belongs to. This is the join point that
/// carries contract income up to property level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRef {
    pub id: String,
    pub property_id: String,
}

/// A cost booked against a property. `unit_id` is informational only; expenses
/// always reduce the property's profit regardless of which unit incurred them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub property_id: String,
    pub unit_id: Option<String>,
    pub amount: f64,
    pub date: NaiveDateTime,
}

/// An inclusive reporting window. `None` on either side leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        self.from.map_or(true, |from| *date >= from)
            && self.to.map_or(true, |to| *date <= to)
    }
}

/// Restrict an allocation run to one property or span them all.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFilter {
    All,
    One(String),
}

impl PropertyFilter {
    fn admits(&self, property_id: &str) -> bool {
        match self {
            PropertyFilter::All => true,
            PropertyFilter::One(id) => id == property_id,
        }
    }
}

/// One partner's slice of the profit for a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerAllocation {
    pub partner_id: String,
    pub partner_name: String,
    /// Profit share per property, in the order properties were supplied.
    pub by_property: IndexMap<String, f64>,
    pub total: f64,
}

impl JSON for PartnerAllocation {}

/// Distribute realised profit across partners by their percentage claims.
///
/// Profit is computed per property first: payments actually received on obligations
/// whose due date falls inside `range`, minus expenses dated inside it. Contract
/// obligations reach their property through the contract's unit; obligations or
/// contracts whose references do not resolve are left out rather than guessed at.
/// Every supplied partner appears in the result, at zero when none of their shares
/// touch an in-scope property.
#[allow(clippy::too_many_arguments)]
pub fn allocate(
    property_ids: &[String],
    units: &[UnitRef],
    contracts: &[Contract],
    partners: &[Partner],
    obligations: &[Obligation],
    expenses: &[Expense],
    range: &DateRange,
    filter: &PropertyFilter,
) -> Vec<PartnerAllocation> {
    let mut profits: IndexMap<&str, f64> = property_ids
        .iter()
        .filter(|id| filter.admits(id))
        .map(|id| (id.as_str(), 0.0))
        .collect();

    for obligation in obligations {
        if !range.contains(&obligation.due_date) || obligation.paid_amount <= 0.0 {
            continue;
        }
        let property_id = match obligation.parent.kind {
            ParentKind::Property => Some(obligation.parent.id.as_str()),
            ParentKind::Contract => contracts
                .iter()
                .find(|c| c.id == obligation.parent.id)
                .and_then(|c| c.unit_id.as_deref())
                .and_then(|unit_id| units.iter().find(|u| u.id == unit_id))
                .map(|u| u.property_id.as_str()),
        };
        if let Some(profit) = property_id.and_then(|id| profits.get_mut(id)) {
            *profit += obligation.paid_amount;
        }
    }
    for expense in expenses {
        if !range.contains(&expense.date) {
            continue;
        }
        if let Some(profit) = profits.get_mut(expense.property_id.as_str()) {
            *profit -= expense.amount;
        }
    }

    let allocations: Vec<PartnerAllocation> = partners
        .iter()
        .map(|partner| {
            let by_property: IndexMap<String, f64> = profits
                .iter()
                .map(|(property_id, profit)| {
                    let share = partner.share_for(property_id) / 100.0;
                    (property_id.to_string(), profit * share)
                })
                .collect();
            let total = by_property.values().sum();
            PartnerAllocation {
                partner_id: partner.id.clone(),
                partner_name: partner.name.clone(),
                by_property,
                total,
            }
        })
        .collect();
    info!(
        properties = profits.len(),
        partners = allocations.len(),
        "allocated profit"
    );
    allocations
}
