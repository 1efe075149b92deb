use actix_web::{HttpResponse, Responder, ResponseError, web};

use crate::dto::DataResponse;
use crate::forms::customer::{CustomerForm, CustomerIndexQuery};
use crate::models::auth::Actor;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::customers as customers_service;

pub async fn create_customer<R>(
    repo: web::Data<R>,
    actor: Actor,
    web::Json(form): web::Json<CustomerForm>,
) -> impl Responder
where
    R: CustomerReader + CustomerWriter + 'static,
{
    match customers_service::create_customer(repo.get_ref(), actor.email(), form) {
        Ok(outcome) => HttpResponse::Created().json(DataResponse::new(outcome)),
        Err(err) => err.error_response(),
    }
}

pub async fn list_customers<R>(
    repo: web::Data<R>,
    web::Query(query): web::Query<CustomerIndexQuery>,
) -> impl Responder
where
    R: CustomerReader + 'static,
{
    match customers_service::list_customers(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => err.error_response(),
    }
}

pub async fn show_customer<R>(repo: web::Data<R>, customer_id: web::Path<i32>) -> impl Responder
where
    R: CustomerReader + 'static,
{
    match customers_service::show_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(DataResponse::new(customer)),
        Err(err) => err.error_response(),
    }
}

pub async fn update_customer<R>(
    repo: web::Data<R>,
    actor: Actor,
    customer_id: web::Path<i32>,
    web::Json(form): web::Json<CustomerForm>,
) -> impl Responder
where
    R: CustomerReader + CustomerWriter + 'static,
{
    match customers_service::update_customer(
        repo.get_ref(),
        actor.email(),
        customer_id.into_inner(),
        form,
    ) {
        Ok(outcome) => HttpResponse::Ok().json(DataResponse::new(outcome)),
        Err(err) => err.error_response(),
    }
}

pub async fn delete_customer<R>(repo: web::Data<R>, customer_id: web::Path<i32>) -> impl Responder
where
    R: CustomerReader + CustomerWriter + 'static,
{
    match customers_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => err.error_response(),
    }
}
