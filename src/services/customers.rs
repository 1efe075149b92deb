//! Customer workflows: create, list, show, update and soft-delete.

use crate::domain::types::{ActorEmail, CustomerEmail, CustomerId};
use crate::dto::customer::{CustomerOperationOutcome, CustomerView};
use crate::forms::customer::{CustomerForm, CustomerIndexParams, CustomerIndexQuery, CustomerPayload};
use crate::pagination::Paginated;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Reports whether an active customer other than `exclude_id` owns `email`.
pub fn is_email_taken<R>(
    repo: &R,
    email: &CustomerEmail,
    exclude_id: Option<CustomerId>,
) -> ServiceResult<bool>
where
    R: CustomerReader + ?Sized,
{
    let owner = repo
        .get_customer_by_email(email, exclude_id)
        .map_err(|err| {
            log::error!("Failed to look up customer email: {err}");
            err
        })?;

    Ok(owner.is_some())
}

/// Validates the payload, checks the email is free and stores a new customer.
pub fn create_customer<R>(
    repo: &R,
    actor: &ActorEmail,
    form: CustomerForm,
) -> ServiceResult<CustomerOperationOutcome>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let payload = CustomerPayload::try_from(form)?;

    if is_email_taken(repo, &payload.email, None)? {
        return Err(ServiceError::EmailTaken);
    }

    let new_customer = payload.into_new_customer(actor.clone());

    let customer = repo.create_customer(&new_customer).map_err(|err| {
        log::error!("Failed to create customer: {err}");
        err
    })?;

    log::info!("Customer {} created by {actor}", customer.id);

    Ok(CustomerOperationOutcome {
        customer_id: customer.id,
    })
}

/// Lists active customers matching the optional keyword, one page at a time.
pub fn list_customers<R>(
    repo: &R,
    query: CustomerIndexQuery,
) -> ServiceResult<Paginated<CustomerView>>
where
    R: CustomerReader + ?Sized,
{
    let params = CustomerIndexParams::try_from(query)?;

    let mut list_query = CustomerListQuery::new().paginate(params.page, params.per_page);
    if let Some(keyword) = params.keyword {
        list_query = list_query.keyword(keyword);
    }

    let (total, customers) = repo.list_customers(list_query).map_err(|err| {
        log::error!("Failed to list customers: {err}");
        err
    })?;

    let items = customers.into_iter().map(CustomerView::from).collect();

    Ok(Paginated::new(items, total, params.page, params.per_page))
}

/// Loads a single active customer.
pub fn show_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<CustomerView>
where
    R: CustomerReader + ?Sized,
{
    let customer_id = CustomerId::new(customer_id)?;

    let customer = repo
        .get_customer_by_id(customer_id)
        .map_err(|err| {
            log::error!("Failed to get customer {customer_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(customer.into())
}

/// Replaces the names and email of an active customer.
///
/// A missing customer is reported before the email check, and the customer's
/// own email never counts as taken.
pub fn update_customer<R>(
    repo: &R,
    actor: &ActorEmail,
    customer_id: i32,
    form: CustomerForm,
) -> ServiceResult<CustomerOperationOutcome>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let payload = CustomerPayload::try_from(form)?;
    let customer_id = CustomerId::new(customer_id)?;

    if repo.get_customer_by_id(customer_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    if is_email_taken(repo, &payload.email, Some(customer_id))? {
        return Err(ServiceError::EmailTaken);
    }

    let updates = payload.into_update(actor.clone());

    let customer = repo
        .update_customer(customer_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update customer {customer_id}: {err}");
            err
        })?;

    Ok(CustomerOperationOutcome {
        customer_id: customer.id,
    })
}

/// Soft-deletes an active customer. Deleting twice reports `NotFound`.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer_id = CustomerId::new(customer_id)?;

    if repo.get_customer_by_id(customer_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_customer(customer_id).map_err(|err| {
        log::error!("Failed to delete customer {customer_id}: {err}");
        err
    })?;

    log::info!("Customer {customer_id} deleted");

    Ok(())
}
