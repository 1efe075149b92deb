use actix_web::{HttpResponse, Responder, get};

/// Liveness probe. Does not touch the store.
#[get("/health-check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
