//! This file defines the fixed category vocabularies and the `CategoryName`
//! type used to classify transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, transaction::TransactionType};

/// The categories an income transaction may be filed under.
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investments", "Gifts", "Other"];

/// The categories an expense transaction may be filed under.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

/// The catch-all category present in both vocabularies.
///
/// Sorted last wherever categories are listed for display.
pub const OTHER_CATEGORY: &str = "Other";

/// The category vocabulary for the given transaction type.
pub fn allowed_categories(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// The name of a category, validated against the vocabulary for a
/// transaction type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name for a transaction of type `kind`.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategory] if `name` is an
    /// empty string, or an [Error::UnknownCategory] if `name` is not part of
    /// the vocabulary for `kind`.
    pub fn new(name: &str, kind: TransactionType) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyCategory);
        }

        if !allowed_categories(kind).contains(&name) {
            return Err(Error::UnknownCategory {
                name: name.to_string(),
                kind,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is part of a vocabulary.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`,
    /// because if the vocabulary invariant is violated it will cause
    /// incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, transaction::TransactionType};

    use super::{CategoryName, EXPENSE_CATEGORIES, INCOME_CATEGORIES, OTHER_CATEGORY};

    #[test]
    fn new_accepts_vocabulary_names() {
        for name in INCOME_CATEGORIES {
            assert!(CategoryName::new(name, TransactionType::Income).is_ok());
        }

        for name in EXPENSE_CATEGORIES {
            assert!(CategoryName::new(name, TransactionType::Expense).is_ok());
        }
    }

    #[test]
    fn new_trims_whitespace() {
        let category = CategoryName::new("  Food ", TransactionType::Expense).unwrap();

        assert_eq!(category.as_ref(), "Food");
    }

    #[test]
    fn new_fails_on_empty_name() {
        assert_eq!(
            CategoryName::new("   ", TransactionType::Expense),
            Err(Error::EmptyCategory)
        );
    }

    #[test]
    fn new_fails_on_name_outside_vocabulary() {
        assert_eq!(
            CategoryName::new("Lottery", TransactionType::Income),
            Err(Error::UnknownCategory {
                name: "Lottery".to_string(),
                kind: TransactionType::Income,
            })
        );
    }

    #[test]
    fn vocabularies_are_type_specific() {
        // "Salary" is an income category only, "Food" an expense category only.
        assert!(CategoryName::new("Salary", TransactionType::Expense).is_err());
        assert!(CategoryName::new("Food", TransactionType::Income).is_err());
    }

    #[test]
    fn both_vocabularies_contain_the_catch_all() {
        assert!(INCOME_CATEGORIES.contains(&OTHER_CATEGORY));
        assert!(EXPENSE_CATEGORIES.contains(&OTHER_CATEGORY));
    }
}
