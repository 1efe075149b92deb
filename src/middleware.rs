//! Response post-processing shared by every route.

use std::future::{Ready, ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{Error, HttpRequest, HttpResponse, Result};
use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::dto::ErrorResponse;

/// Generic message for failures that did not produce their own JSON body.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

fn internal_error(req: HttpRequest) -> ServiceResponse {
    let response =
        HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE));
    ServiceResponse::new(req, response)
}

/// Rewrites bare `500` responses into `{"error": "Internal Server Error"}`.
///
/// Responses that already carry a JSON body (store errors rendered by the
/// service layer) pass through untouched.
pub fn json_internal_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error::<B>)
}

fn render_internal_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    log::error!("Unhandled failure on {}", res.request().path());

    let (req, _) = res.into_parts();
    let res: ServiceResponse<EitherBody<B>> = internal_error(req).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}

/// Turns a panic inside the wrapped service into a JSON `500` response.
///
/// Without it a panicking handler drops the connection.
pub struct CatchPanic;

impl<S, B> Transform<S, ServiceRequest> for CatchPanic
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CatchPanicMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchPanicMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct CatchPanicMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CatchPanicMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();
        let service = Rc::clone(&self.service);

        async move {
            match AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await
            {
                Ok(result) => result.map(ServiceResponse::map_into_left_body),
                Err(_) => {
                    log::error!(
                        "Handler panicked on {} {}",
                        http_req.method(),
                        http_req.path()
                    );
                    Ok(internal_error(http_req).map_into_right_body())
                }
            }
        }
        .boxed_local()
    }
}
