use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActorEmail, CustomerEmail, CustomerId, CustomerName};

/// A customer record as stored, including soft-delete and audit metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name_th: CustomerName,
    pub name_en: CustomerName,
    pub email: CustomerEmail,
    /// Set once the customer has been soft-deleted. Deleted rows are kept.
    pub is_deleted: bool,
    pub created_by: ActorEmail,
    pub created_at: NaiveDateTime,
    pub updated_by: ActorEmail,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a customer. The store assigns the identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub name_th: CustomerName,
    pub name_en: CustomerName,
    pub email: CustomerEmail,
    pub created_by: ActorEmail,
    pub created_at: NaiveDateTime,
}

impl NewCustomer {
    /// Builds a new customer stamped with the current time.
    #[must_use]
    pub fn new(
        name_th: CustomerName,
        name_en: CustomerName,
        email: CustomerEmail,
        created_by: ActorEmail,
    ) -> Self {
        Self {
            name_th,
            name_en,
            email,
            created_by,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Mutable customer fields. Identifier and creation metadata never change.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCustomer {
    pub name_th: CustomerName,
    pub name_en: CustomerName,
    pub email: CustomerEmail,
    pub updated_by: ActorEmail,
    pub updated_at: NaiveDateTime,
}

impl UpdateCustomer {
    /// Builds an update stamped with the current time.
    #[must_use]
    pub fn new(
        name_th: CustomerName,
        name_en: CustomerName,
        email: CustomerEmail,
        updated_by: ActorEmail,
    ) -> Self {
        Self {
            name_th,
            name_en,
            email,
            updated_by,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Customer {
    /// Whether the keyword occurs in either name or the email, ignoring case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        [
            self.name_th.as_str(),
            self.name_en.as_str(),
            self.email.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        let now = Utc::now().naive_utc();
        Customer {
            id: CustomerId::new(1).unwrap(),
            name_th: CustomerName::new("สมชาย").unwrap(),
            name_en: CustomerName::new("Somchai").unwrap(),
            email: CustomerEmail::new("somchai@example.com").unwrap(),
            is_deleted: false,
            created_by: ActorEmail::new("admin@example.com").unwrap(),
            created_at: now,
            updated_by: ActorEmail::new("admin@example.com").unwrap(),
            updated_at: now,
        }
    }

    #[test]
    fn keyword_matches_any_field_ignoring_case() {
        let customer = sample();
        assert!(customer.matches_keyword("SOMCHAI"));
        assert!(customer.matches_keyword("สมชาย"));
        assert!(customer.matches_keyword("@example"));
        assert!(!customer.matches_keyword("nobody"));
    }
}
