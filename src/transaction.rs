//! Defines the core data model for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::category::CategoryName;

/// Alias for the integer type used for transaction IDs.
///
/// IDs are assigned by [TransactionStore](crate::TransactionStore) from a
/// monotonic counter and are unique for the lifetime of the store.
pub type TransactionId = i64;

/// The placeholder description given to transactions created without one.
pub const DEFAULT_DESCRIPTION: &str = "Transaction";

/// Whether a transaction records money that was earned or money that was
/// spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money flowing in, e.g. a salary payment.
    Income,
    /// Money flowing out, e.g. a grocery shop.
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// To create a new `Transaction`, pass the result of [Transaction::build] to
/// [TransactionStore::add](crate::TransactionStore::add), which validates the
/// builder and assigns the ID and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Always finite and strictly positive. The direction of the movement is
    /// carried by `kind`.
    pub amount: f64,
    /// The category the transaction belongs to, e.g. "Food", "Salary".
    pub category: CategoryName,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(kind: TransactionType, amount: f64, category: &str) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            category: category.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            date: None,
        }
    }
}

/// A builder for creating [Transaction] instances through a store.
///
/// The builder carries the caller-supplied fields; the store validates them
/// and fills in the ID and, when no date is set, the current date.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// Whether the transaction is an income or an expense.
    ///
    /// The category is validated against this type's vocabulary, so an
    /// expense cannot be filed under "Salary" and an income cannot be filed
    /// under "Food".
    pub kind: TransactionType,

    /// The monetary amount of the transaction.
    ///
    /// Must be a finite, strictly positive number. Builders with any other
    /// amount are rejected by the store with
    /// [Error::InvalidAmount](crate::Error::InvalidAmount).
    pub amount: f64,

    /// The raw category name, checked against the vocabulary for `kind`
    /// when the builder is finalized.
    pub category: String,

    /// A human-readable description of the transaction.
    ///
    /// Defaults to [DEFAULT_DESCRIPTION] if not specified.
    pub description: String,

    /// The date when the transaction occurred.
    ///
    /// Defaults to the store's current local date if not specified. The date
    /// must not be in the future.
    pub date: Option<Date>,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}

#[cfg(test)]
mod builder_tests {
    use time::macros::date;

    use super::{DEFAULT_DESCRIPTION, Transaction, TransactionType};

    #[test]
    fn build_sets_required_fields() {
        let builder = Transaction::build(TransactionType::Expense, 42.0, "Food");

        assert_eq!(builder.kind, TransactionType::Expense);
        assert_eq!(builder.amount, 42.0);
        assert_eq!(builder.category, "Food");
    }

    #[test]
    fn build_defaults_description_to_placeholder() {
        let builder = Transaction::build(TransactionType::Income, 100.0, "Salary");

        assert_eq!(builder.description, DEFAULT_DESCRIPTION);
        assert_eq!(builder.date, None);
    }

    #[test]
    fn builder_overrides_description_and_date() {
        let builder = Transaction::build(TransactionType::Expense, 42.0, "Food")
            .description("Friday groceries")
            .date(date!(2024 - 01 - 16));

        assert_eq!(builder.description, "Friday groceries");
        assert_eq!(builder.date, Some(date!(2024 - 01 - 16)));
    }
}
