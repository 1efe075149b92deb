//! Public shapes of the customer resource.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;

/// Public view of a customer, used by the listing and `GET /customers/{id}`.
///
/// The deletion flag is never exposed: only active customers are returned.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i32,
    pub name_th: String,
    pub name_en: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub created_by: String,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.get(),
            name_th: customer.name_th.into_inner(),
            name_en: customer.name_en.into_inner(),
            email: customer.email.into_inner(),
            created_at: customer.created_at,
            created_by: customer.created_by.into_inner(),
            updated_at: customer.updated_at,
            updated_by: customer.updated_by.into_inner(),
        }
    }
}

/// Outcome of a create or update.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOperationOutcome {
    pub customer_id: CustomerId,
}
