use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::domain::types::{ActorEmail, CustomerEmail, CustomerName};
use crate::forms::FormError;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body for creating or replacing a customer.
pub struct CustomerForm {
    /// Name written in Thai.
    #[validate(length(min = 1))]
    pub name_th: String,
    /// Name written in English.
    #[validate(length(min = 1))]
    pub name_en: String,
    /// Contact address, unique among active customers.
    #[validate(email)]
    pub email: String,
}

/// Validated counterpart of [`CustomerForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPayload {
    pub name_th: CustomerName,
    pub name_en: CustomerName,
    pub email: CustomerEmail,
}

impl TryFrom<CustomerForm> for CustomerPayload {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name_th: CustomerName::new(form.name_th).map_err(|_| FormError::InvalidName)?,
            name_en: CustomerName::new(form.name_en).map_err(|_| FormError::InvalidName)?,
            email: CustomerEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?,
        })
    }
}

impl CustomerPayload {
    pub fn into_new_customer(self, actor: ActorEmail) -> NewCustomer {
        NewCustomer::new(self.name_th, self.name_en, self.email, actor)
    }

    pub fn into_update(self, actor: ActorEmail) -> UpdateCustomer {
        UpdateCustomer::new(self.name_th, self.name_en, self.email, actor)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Query string of the customer listing.
pub struct CustomerIndexQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub keyword: Option<String>,
}

/// Sanitized listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIndexParams {
    pub page: usize,
    pub per_page: usize,
    pub keyword: Option<String>,
}

impl TryFrom<CustomerIndexQuery> for CustomerIndexParams {
    type Error = FormError;

    fn try_from(query: CustomerIndexQuery) -> Result<Self, Self::Error> {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(FormError::InvalidPage);
        }

        let per_page = query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
        if !(1..=MAX_ITEMS_PER_PAGE).contains(&per_page) {
            return Err(FormError::InvalidPerPage(MAX_ITEMS_PER_PAGE));
        }

        // The row offset of the page must fit an SQL integer.
        let offset_fits = (page - 1)
            .checked_mul(per_page)
            .is_some_and(|offset| i64::try_from(offset).is_ok());
        if !offset_fits {
            return Err(FormError::PageOutOfRange);
        }

        let keyword = query
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            page,
            per_page,
            keyword,
        })
    }
}
