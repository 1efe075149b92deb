//! HTTP surface of the service, mounted under `/api/v1`.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error, web};

use crate::dto::ErrorResponse;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::ServiceError;

pub mod customers;
pub mod health;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Form(_) | ServiceError::TypeConstraint(_) | ServiceError::EmailTaken => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Repository(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

fn bad_request<E>(err: E, message: String) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::debug!("Rejected request input: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::new(message)),
    )
    .into()
}

/// Renders malformed JSON bodies as `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = err.to_string();
        bad_request(err, message)
    })
}

/// Renders unparsable query strings as `400 {"error": ...}`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = err.to_string();
        bad_request(err, message)
    })
}

/// Renders non-numeric path ids as `400 {"error": "invalid id"}`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req: &HttpRequest| bad_request(err, "invalid id".to_string()))
}

/// Registers every `/api/v1` route against the repository type `R`.
///
/// The repository itself must be registered as `web::Data<R>`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: CustomerReader + CustomerWriter + 'static,
{
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::resource(["/customers", "/customers/"])
                .route(web::post().to(customers::create_customer::<R>))
                .route(web::get().to(customers::list_customers::<R>)),
        )
        .service(
            web::resource("/customers/{customer_id}")
                .route(web::get().to(customers::show_customer::<R>))
                .route(web::put().to(customers::update_customer::<R>))
                .route(web::delete().to(customers::delete_customer::<R>)),
        )
        .service(health::health_check);
}
