//! Storage capability for customers.
//!
//! Services depend on the [`CustomerReader`] and [`CustomerWriter`] traits
//! only. [`DieselRepository`] is the SQLite-backed implementation used by
//! the server, [`memory::InMemoryRepository`] is a substitute for tests and
//! local experiments.

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CustomerEmail, CustomerId};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of matching rows to skip before the page window starts.
    ///
    /// Saturates at `usize::MAX`; such a window lies past every result.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Filter applied when listing active customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    /// Case-insensitive substring matched against both names and the email.
    pub keyword: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search keyword. Blank keywords are ignored.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into().trim().to_string();
        self.keyword = Some(keyword).filter(|k| !k.is_empty());
        self
    }

    /// Restricts the result to one page. Both values must be at least one.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    /// Returns the customer unless it does not exist or has been soft-deleted.
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    /// Finds an active customer owning `email`, ignoring `exclude_id`.
    fn get_customer_by_email(
        &self,
        email: &CustomerEmail,
        exclude_id: Option<CustomerId>,
    ) -> RepositoryResult<Option<Customer>>;
    /// Returns the total number of matches and the requested page, ordered by id.
    fn list_customers(&self, query: CustomerListQuery)
    -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    /// Sets the deletion flag. Fails with `NotFound` if no active customer matches.
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
}

/// Diesel-backed repository sharing a connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
