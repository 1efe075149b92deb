use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{
    ActorEmail, CustomerEmail, CustomerId, CustomerName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name_th: String,
    pub name_en: String,
    pub email: String,
    pub is_deleted: bool,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_by: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`]. `is_deleted` falls back to its column default.
pub struct NewCustomer<'a> {
    pub name_th: &'a str,
    pub name_en: &'a str,
    pub email: &'a str,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_by: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub name_th: &'a str,
    pub name_en: &'a str,
    pub email: &'a str,
    pub updated_by: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(customer.id)?,
            name_th: CustomerName::new(customer.name_th)?,
            name_en: CustomerName::new(customer.name_en)?,
            email: CustomerEmail::new(customer.email)?,
            is_deleted: customer.is_deleted,
            created_by: ActorEmail::new(customer.created_by)?,
            created_at: customer.created_at,
            updated_by: ActorEmail::new(customer.updated_by)?,
            updated_at: customer.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name_th: customer.name_th.as_str(),
            name_en: customer.name_en.as_str(),
            email: customer.email.as_str(),
            created_by: customer.created_by.as_str(),
            created_at: customer.created_at,
            updated_by: customer.created_by.as_str(),
            updated_at: customer.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            name_th: customer.name_th.as_str(),
            name_en: customer.name_en.as_str(),
            email: customer.email.as_str(),
            updated_by: customer.updated_by.as_str(),
            updated_at: customer.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn actor() -> ActorEmail {
        ActorEmail::new("admin@example.com").unwrap()
    }

    #[test]
    fn from_domain_new_stamps_creator_as_updater() {
        let domain = DomainNewCustomer::new(
            CustomerName::new("สมชาย").unwrap(),
            CustomerName::new("Somchai").unwrap(),
            CustomerEmail::new("somchai@example.com").unwrap(),
            actor(),
        );
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.name_th, "สมชาย");
        assert_eq!(new.name_en, "Somchai");
        assert_eq!(new.email, "somchai@example.com");
        assert_eq!(new.created_by, new.updated_by);
        assert_eq!(new.created_at, new.updated_at);
    }

    #[test]
    fn from_domain_update_creates_changeset() {
        let domain = DomainUpdateCustomer::new(
            CustomerName::new("สมหญิง").unwrap(),
            CustomerName::new("Somying").unwrap(),
            CustomerEmail::new("somying@example.com").unwrap(),
            actor(),
        );
        let update: UpdateCustomer = (&domain).into();
        assert_eq!(update.name_en, "Somying");
        assert_eq!(update.email, "somying@example.com");
        assert_eq!(update.updated_by, "admin@example.com");
        assert_eq!(update.updated_at, domain.updated_at);
    }

    #[test]
    fn customer_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_customer = Customer {
            id: 3,
            name_th: "ทดสอบ".to_string(),
            name_en: "Test".to_string(),
            email: "test@example.com".to_string(),
            is_deleted: false,
            created_by: "admin@example.com".to_string(),
            created_at: now,
            updated_by: "editor@example.com".to_string(),
            updated_at: now,
        };
        let domain = DomainCustomer::try_from(db_customer).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name_th.as_str(), "ทดสอบ");
        assert_eq!(domain.updated_by.as_str(), "editor@example.com");
        assert!(!domain.is_deleted);
    }

    #[test]
    fn corrupted_row_fails_conversion() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_customer = Customer {
            id: 0,
            name_th: "ทดสอบ".to_string(),
            name_en: "Test".to_string(),
            email: "test@example.com".to_string(),
            is_deleted: false,
            created_by: "admin@example.com".to_string(),
            created_at: now,
            updated_by: "admin@example.com".to_string(),
            updated_at: now,
        };
        assert_eq!(
            DomainCustomer::try_from(db_customer),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
