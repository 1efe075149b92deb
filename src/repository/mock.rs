//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CustomerEmail, CustomerId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn get_customer_by_email(
            &self,
            email: &CustomerEmail,
            exclude_id: Option<CustomerId>,
        ) -> RepositoryResult<Option<Customer>>;
        fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
    }
}
