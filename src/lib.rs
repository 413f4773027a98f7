//! Finboard is a library for tracking personal income and expenses.
//!
//! It keeps an ordered, in-memory collection of transactions behind
//! [TransactionStore] and derives the dashboard views over it on demand:
//! aggregate totals with a per-category expense breakdown, and a
//! month-by-month income/expense series for charting.

#![warn(missing_docs)]

use time::Date;

mod category;
mod format;
mod sample;
mod store;
mod summary;
mod timezone;
mod transaction;

pub use category::{
    CategoryName, EXPENSE_CATEGORIES, INCOME_CATEGORIES, OTHER_CATEGORY, allowed_categories,
};
pub use format::{clamp, format_currency, format_date, lerp, percentage, short_month_name};
pub use sample::sample_transactions;
pub use store::TransactionStore;
pub use summary::{
    MonthlyTotals, TransactionSummary, expense_breakdown, monthly_series, recent_transactions,
    summarize,
};
pub use timezone::local_offset;
pub use transaction::{
    DEFAULT_DESCRIPTION, Transaction, TransactionBuilder, TransactionId, TransactionType,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction was given an amount that is zero, negative, or not a
    /// finite number.
    ///
    /// Transactions record money that actually moved, so every amount must
    /// be a finite, strictly positive number. The direction of the movement
    /// is carried by [TransactionType], not by the sign of the amount.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// An empty string was used as a category name.
    #[error("category name cannot be empty")]
    EmptyCategory,

    /// A category name was used that is not part of the fixed vocabulary
    /// for the transaction type.
    #[error("\"{name}\" is not a valid {kind} category")]
    UnknownCategory {
        /// The rejected category name.
        name: String,
        /// The transaction type whose vocabulary was checked.
        kind: TransactionType,
    },

    /// A date in the future was used for a transaction.
    ///
    /// Transactions record events that have already happened, therefore
    /// future dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// An error occurred while resolving a canonical timezone string to a
    /// UTC offset.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}
