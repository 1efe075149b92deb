//! In-memory customer store.
//!
//! Mirrors the SQLite repository's observable behavior: ids are assigned
//! sequentially from 1, listings are ordered by id, soft-deleted rows stay in
//! the store but are invisible to reads, and active emails are unique.

use std::sync::{Mutex, MutexGuard};

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CustomerEmail, CustomerId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    customers: Vec<Customer>,
}

impl Store {
    fn active(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter().filter(|c| !c.is_deleted)
    }

    fn ensure_email_free(
        &self,
        email: &CustomerEmail,
        exclude_id: Option<CustomerId>,
    ) -> RepositoryResult<()> {
        let taken = self
            .active()
            .any(|c| c.email.matches(email) && Some(c.id) != exclude_id);
        if taken {
            return Err(RepositoryError::UniqueViolation(format!(
                "email {email} belongs to an active customer"
            )));
        }
        Ok(())
    }
}

/// Thread-safe, process-local implementation of the customer repository traits.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored row, soft-deleted ones included.
    pub fn all_rows(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.lock()?.customers.clone())
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::ConnectionError("in-memory store poisoned".to_string()))
    }
}

impl CustomerReader for InMemoryRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        Ok(self.lock()?.active().find(|c| c.id == id).cloned())
    }

    fn get_customer_by_email(
        &self,
        email: &CustomerEmail,
        exclude_id: Option<CustomerId>,
    ) -> RepositoryResult<Option<Customer>> {
        Ok(self
            .lock()?
            .active()
            .find(|c| c.email.matches(email) && Some(c.id) != exclude_id)
            .cloned())
    }

    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let store = self.lock()?;

        let matching: Vec<&Customer> = store
            .active()
            .filter(|c| {
                query
                    .keyword
                    .as_deref()
                    .is_none_or(|keyword| c.matches_keyword(keyword))
            })
            .collect();

        let total = matching.len();

        let items = match &query.pagination {
            Some(pagination) => matching
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .cloned()
                .collect(),
            None => matching.into_iter().cloned().collect(),
        };

        Ok((total, items))
    }
}

impl CustomerWriter for InMemoryRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut store = self.lock()?;
        store.ensure_email_free(&new_customer.email, None)?;

        store.last_id += 1;
        let customer = Customer {
            id: CustomerId::new(store.last_id)?,
            name_th: new_customer.name_th.clone(),
            name_en: new_customer.name_en.clone(),
            email: new_customer.email.clone(),
            is_deleted: false,
            created_by: new_customer.created_by.clone(),
            created_at: new_customer.created_at,
            updated_by: new_customer.created_by.clone(),
            updated_at: new_customer.created_at,
        };
        store.customers.push(customer.clone());

        Ok(customer)
    }

    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        let mut store = self.lock()?;
        store.ensure_email_free(&updates.email, Some(id))?;

        let customer = store
            .customers
            .iter_mut()
            .find(|c| c.id == id && !c.is_deleted)
            .ok_or(RepositoryError::NotFound)?;

        customer.name_th = updates.name_th.clone();
        customer.name_en = updates.name_en.clone();
        customer.email = updates.email.clone();
        customer.updated_by = updates.updated_by.clone();
        customer.updated_at = updates.updated_at;

        Ok(customer.clone())
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()> {
        let mut store = self.lock()?;

        let customer = store
            .customers
            .iter_mut()
            .find(|c| c.id == id && !c.is_deleted)
            .ok_or(RepositoryError::NotFound)?;
        customer.is_deleted = true;

        Ok(())
    }
}
