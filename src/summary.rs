//! Transaction data aggregation and transformation for dashboard display.
//!
//! Provides pure functions to derive aggregate totals, per-category expense
//! breakdowns, and monthly income/expense series from a transaction
//! snapshot. Every function recomputes from scratch on each call, so the
//! output always equals a full pass over the input.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::{
    category::OTHER_CATEGORY,
    format::short_month_name,
    transaction::{Transaction, TransactionType},
};

/// Aggregate totals derived from a transaction snapshot.
///
/// Never stored; recompute with [summarize] whenever the snapshot changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
    /// Summed expense amounts keyed by category name.
    ///
    /// Income is not broken out by category in this projection.
    pub categories: HashMap<String, f64>,
}

/// The income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// The first day of the month this entry covers.
    pub month: Date,
    /// The month as a three-letter abbreviation, e.g. "Jan".
    pub label: String,
    /// The sum of income amounts dated within the month.
    pub income: f64,
    /// The sum of expense amounts dated within the month.
    pub expenses: f64,
}

/// Derive the aggregate totals for a transaction snapshot in a single pass.
///
/// An empty snapshot yields zero totals and an empty category map.
pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let mut summary = TransactionSummary::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => summary.total_income += transaction.amount,
            TransactionType::Expense => {
                summary.total_expenses += transaction.amount;
                *summary
                    .categories
                    .entry(transaction.category.as_ref().to_owned())
                    .or_insert(0.0) += transaction.amount;
            }
        }
    }

    summary.balance = summary.total_income - summary.total_expenses;

    summary
}

/// The income/expense totals for each of the `month_count` calendar months
/// ending at `reference_date`'s month (inclusive), oldest first.
///
/// A transaction belongs to an entry when its date falls in that calendar
/// month (year and month equality), never by a rolling window. Months with
/// no transactions produce zero totals, so the output always has exactly
/// `month_count` entries.
pub fn monthly_series(
    transactions: &[Transaction],
    reference_date: Date,
    month_count: usize,
) -> Vec<MonthlyTotals> {
    let mut series = Vec::with_capacity(month_count);

    for offset in (0..month_count).rev() {
        let month = months_before(reference_date, offset);

        let mut income = 0.0;
        let mut expenses = 0.0;

        for transaction in transactions {
            if transaction.date.year() == month.year()
                && transaction.date.month() == month.month()
            {
                match transaction.kind {
                    TransactionType::Income => income += transaction.amount,
                    TransactionType::Expense => expenses += transaction.amount,
                }
            }
        }

        series.push(MonthlyTotals {
            month,
            label: short_month_name(month.month()).to_owned(),
            income,
            expenses,
        });
    }

    series
}

/// The first day of the calendar month `months` months before `date`'s
/// month.
pub(crate) fn months_before(date: Date, months: usize) -> Date {
    let mut year = date.year();
    let mut month = date.month();

    for _ in 0..months {
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }

    // The first of the month is always a valid date.
    Date::from_calendar_date(year, month, 1).unwrap()
}

/// Convert a summary's expense categories into sorted label and value pairs
/// for charting.
///
/// Categories are sorted alphabetically with [OTHER_CATEGORY] last.
pub fn expense_breakdown(summary: &TransactionSummary) -> Vec<(String, f64)> {
    let mut breakdown: Vec<(String, f64)> = summary
        .categories
        .iter()
        .map(|(name, amount)| (name.clone(), *amount))
        .collect();

    breakdown.sort_by(|(a, _), (b, _)| a.cmp(b));

    if let Some(position) = breakdown
        .iter()
        .position(|(name, _)| name == OTHER_CATEGORY)
    {
        let other = breakdown.remove(position);
        breakdown.push(other);
    }

    breakdown
}

/// Up to `count` transactions ordered newest first.
///
/// Ties on the date are broken by descending ID, so two calls over the same
/// snapshot always return the same order.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted.truncate(count);

    sorted
}
