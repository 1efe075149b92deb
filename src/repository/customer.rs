use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::{get_connection, unicode_lower};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CustomerEmail, CustomerId};
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository};
use crate::schema::customers;

const LIKE_ESCAPE: char = '\\';

/// Escapes LIKE wildcards so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Customers without the deletion flag, optionally narrowed by keyword.
///
/// Columns go through [`unicode_lower`] and the pattern through
/// `str::to_lowercase`, so the match ignores case beyond ASCII.
fn active_customers(keyword: Option<&str>) -> customers::BoxedQuery<'static, Sqlite> {
    let mut query = customers::table
        .filter(customers::is_deleted.eq(false))
        .into_boxed();

    if let Some(keyword) = keyword {
        let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
        query = query.filter(
            unicode_lower(customers::name_th)
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(unicode_lower(customers::name_en)
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE))
                .or(unicode_lower(customers::email)
                    .like(pattern)
                    .escape(LIKE_ESCAPE)),
        );
    }

    query
}

fn into_domain(rows: Vec<DbCustomer>) -> RepositoryResult<Vec<Customer>> {
    rows.into_iter()
        .map(|row| Customer::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let mut conn = get_connection(self.pool())?;

        let customer = customers::table
            .filter(customers::id.eq(id.get()))
            .filter(customers::is_deleted.eq(false))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Customer::try_from).transpose()?)
    }

    fn get_customer_by_email(
        &self,
        email: &CustomerEmail,
        exclude_id: Option<CustomerId>,
    ) -> RepositoryResult<Option<Customer>> {
        let mut conn = get_connection(self.pool())?;

        let mut query = customers::table
            .filter(unicode_lower(customers::email).eq(email.lookup_key()))
            .filter(customers::is_deleted.eq(false))
            .into_boxed();

        if let Some(exclude_id) = exclude_id {
            query = query.filter(customers::id.ne(exclude_id.get()));
        }

        let customer = query
            .order(customers::id.asc())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Customer::try_from).transpose()?)
    }

    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let mut conn = get_connection(self.pool())?;
        let keyword = query.keyword.as_deref();

        let total: i64 = active_customers(keyword).count().get_result(&mut conn)?;

        let mut items = active_customers(keyword).order(customers::id.asc());

        if let Some(pagination) = &query.pagination {
            // An offset SQLite cannot represent lies past every row.
            let Ok(offset) = i64::try_from(pagination.offset()) else {
                return Ok((total as usize, Vec::new()));
            };
            let limit = i64::try_from(pagination.per_page).map_err(|_| {
                RepositoryError::ValidationError(format!(
                    "page size {} is out of range",
                    pagination.per_page
                ))
            })?;
            items = items.limit(limit).offset(offset);
        }

        let items = into_domain(items.load::<DbCustomer>(&mut conn)?)?;

        Ok((total as usize, items))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut conn = get_connection(self.pool())?;
        let insertable: DbNewCustomer = new_customer.into();

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(Customer::try_from(created)?)
    }

    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        let mut conn = get_connection(self.pool())?;
        let changes: DbUpdateCustomer = updates.into();

        let updated = diesel::update(
            customers::table
                .filter(customers::id.eq(id.get()))
                .filter(customers::is_deleted.eq(false)),
        )
        .set(&changes)
        .get_result::<DbCustomer>(&mut conn)?;

        Ok(Customer::try_from(updated)?)
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()> {
        let mut conn = get_connection(self.pool())?;

        let affected = diesel::update(
            customers::table
                .filter(customers::id.eq(id.get()))
                .filter(customers::is_deleted.eq(false)),
        )
        .set(customers::is_deleted.eq(true))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
