//! Deterministic sample data for seeding a demo store.
//!
//! The schedule is fixed rather than random so that seeded stores are
//! reproducible: the same reference date always produces the same
//! transactions.

use time::Date;

use crate::{
    summary::months_before,
    transaction::{Transaction, TransactionBuilder, TransactionType},
};

/// Salary amounts for the six sample months, oldest first.
const SALARY_AMOUNTS: [f64; 6] = [58_000.0, 58_000.0, 61_500.0, 61_500.0, 64_000.0, 64_000.0];

/// The expense plan repeated each month: category, amount, day of month.
///
/// Days stay at or below 28 so the plan fits every month.
const MONTHLY_EXPENSES: [(&str, f64, u8); 8] = [
    ("Food", 2_400.0, 3),
    ("Transport", 900.0, 5),
    ("Bills", 3_200.0, 8),
    ("Shopping", 1_800.0, 12),
    ("Food", 1_600.0, 17),
    ("Entertainment", 750.0, 21),
    ("Health", 1_200.0, 24),
    ("Education", 2_000.0, 27),
];

/// Generate a fixed schedule of sample transactions covering the six
/// calendar months ending at `today`'s month.
///
/// Each month gets one salary income on the 1st and the expense plan spread
/// across the month, skipping entries that would land after `today`. Pass
/// the result to [TransactionStore::seed](crate::TransactionStore::seed).
pub fn sample_transactions(today: Date) -> Vec<TransactionBuilder> {
    let mut builders = Vec::new();

    for (month_index, salary) in SALARY_AMOUNTS.iter().enumerate() {
        let month = months_before(today, SALARY_AMOUNTS.len() - 1 - month_index);

        builders.push(
            Transaction::build(TransactionType::Income, *salary, "Salary")
                .description("Monthly salary")
                .date(month),
        );

        for (category, amount, day) in MONTHLY_EXPENSES {
            // Day 28 or less is valid in every month.
            let date = month.replace_day(day).unwrap();
            if date > today {
                continue;
            }

            builders.push(
                Transaction::build(TransactionType::Expense, amount, category)
                    .description("Daily expense")
                    .date(date),
            );
        }
    }

    builders
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{store::TransactionStore, summary::monthly_series};

    use super::sample_transactions;

    #[test]
    fn sample_is_deterministic() {
        let today = date!(2024 - 06 - 15);

        assert_eq!(sample_transactions(today), sample_transactions(today));
    }

    #[test]
    fn sample_contains_no_future_dates() {
        let today = date!(2024 - 06 - 15);

        assert!(
            sample_transactions(today)
                .iter()
                .all(|builder| builder.date.unwrap() <= today)
        );
    }

    #[test]
    fn sample_seeds_cleanly() {
        let mut store = TransactionStore::new();

        let created = store
            .seed(sample_transactions(date!(2024 - 06 - 15)))
            .expect("Could not seed sample data");

        assert_eq!(created.len(), store.len());
        assert!(!store.is_empty());
    }

    #[test]
    fn sample_covers_every_month_of_the_series() {
        let today = date!(2024 - 06 - 15);
        let mut store = TransactionStore::new();
        store.seed(sample_transactions(today)).unwrap();

        let series = monthly_series(store.list(), today, 6);

        assert_eq!(series.len(), 6);
        assert!(
            series
                .iter()
                .all(|point| point.income > 0.0 && point.expenses > 0.0)
        );
    }
}
