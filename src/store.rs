//! The in-memory transaction store, the sole owner of the transaction
//! collection and its only write path.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    category::CategoryName,
    summary::{self, MonthlyTotals, TransactionSummary},
    timezone,
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Owns the transaction collection and handles the creation and removal of
/// transactions.
///
/// The store is an ordinary owned value, so it can be instantiated per
/// session or per test. All mutation goes through `&mut self`, which keeps
/// writers serialized: a summary can never observe a partially-applied add,
/// delete, or seed.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    local_offset: UtcOffset,
}

impl TransactionStore {
    /// Create an empty store that stamps new transactions with the current
    /// UTC date.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
            local_offset: UtcOffset::UTC,
        }
    }

    /// Create an empty store that stamps new transactions with the current
    /// date in the given timezone, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidTimezone] if
    /// `canonical_timezone` is not a recognized timezone name.
    pub fn with_timezone(canonical_timezone: &str) -> Result<Self, Error> {
        Ok(Self {
            local_offset: timezone::local_offset(canonical_timezone)?,
            ..Self::new()
        })
    }

    /// The current date in the store's timezone.
    ///
    /// Used to stamp transactions created without an explicit date and as
    /// the reference date for [TransactionStore::monthly_series].
    pub fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.local_offset).date()
    }

    /// Validate `builder` and add the resulting transaction to the store.
    ///
    /// The new transaction is given the next free ID and, if the builder
    /// carries no date, today's date. It is inserted at the front of the
    /// collection so that [TransactionStore::list] reads newest first.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::InvalidAmount] if the amount is not a finite positive number,
    /// - or [Error::EmptyCategory] or [Error::UnknownCategory] if the
    ///   category is not part of the vocabulary for the builder's type,
    /// - or [Error::FutureDate] if the builder carries a date after today.
    pub fn add(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = finalize(builder, self.next_id, self.today())?;
        self.next_id += 1;
        self.transactions.insert(0, transaction.clone());

        tracing::debug!(
            "added {} transaction {} for {}",
            transaction.kind,
            transaction.id,
            transaction.amount
        );

        Ok(transaction)
    }

    /// Replace the store contents with the given builders.
    ///
    /// Builders are validated and finalized exactly as in
    /// [TransactionStore::add], with IDs restarting from 1 so that seeding
    /// the same data twice produces the same transactions. The first invalid
    /// builder aborts the seed and leaves the store unchanged.
    ///
    /// Returns the created transactions in the order the builders were
    /// given.
    ///
    /// # Errors
    ///
    /// This function will return the same errors as
    /// [TransactionStore::add], raised by the first builder that fails
    /// validation.
    pub fn seed(&mut self, builders: Vec<TransactionBuilder>) -> Result<Vec<Transaction>, Error> {
        let today = self.today();

        let mut created = Vec::with_capacity(builders.len());
        for (index, builder) in builders.into_iter().enumerate() {
            created.push(finalize(builder, 1 + index as TransactionId, today)?);
        }

        self.next_id = created.len() as TransactionId + 1;
        self.transactions = created.iter().rev().cloned().collect();

        tracing::debug!("seeded store with {} transactions", created.len());

        Ok(created)
    }

    /// Remove the transaction with the given ID.
    ///
    /// Returns whether a removal occurred. Deleting an ID that is not
    /// present is a no-op, not an error, so deletion is idempotent.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);
        let removed = self.transactions.len() != count_before;

        if removed {
            tracing::debug!("deleted transaction {id}");
        }

        removed
    }

    /// The current transactions, newest first.
    ///
    /// The ordering is a display convenience; the contract is only that
    /// every transaction has a unique ID and a recorded date.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The aggregate totals for the current snapshot.
    ///
    /// Recomputed from scratch on every call; see [summary::summarize].
    pub fn summary(&self) -> TransactionSummary {
        summary::summarize(&self.transactions)
    }

    /// The income/expense series for the `month_count` calendar months
    /// ending at today's month, oldest first.
    pub fn monthly_series(&self, month_count: usize) -> Vec<MonthlyTotals> {
        summary::monthly_series(&self.transactions, self.today(), month_count)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a builder and turn it into a transaction with the given ID,
/// dating it `today` when the builder carries no date.
fn finalize(
    builder: TransactionBuilder,
    id: TransactionId,
    today: Date,
) -> Result<Transaction, Error> {
    if !builder.amount.is_finite() || builder.amount <= 0.0 {
        return Err(Error::InvalidAmount(builder.amount));
    }

    let category = CategoryName::new(&builder.category, builder.kind)?;

    let date = builder.date.unwrap_or(today);
    if date > today {
        return Err(Error::FutureDate(date));
    }

    Ok(Transaction {
        id,
        kind: builder.kind,
        amount: builder.amount,
        category,
        description: builder.description,
        date,
    })
}
