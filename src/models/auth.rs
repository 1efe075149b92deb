//! Identity of the caller performing a write.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use crate::domain::types::ActorEmail;
use crate::models::config::ServerConfig;
use crate::services::ServiceError;

/// Request header carrying the caller's email.
pub const ACTOR_HEADER: &str = "X-Actor-Email";

/// Caller identity stamped into `created_by` / `updated_by`.
///
/// Taken from the [`ACTOR_HEADER`] header when present, otherwise from
/// [`ServerConfig::default_actor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor(ActorEmail);

impl Actor {
    pub fn new(email: ActorEmail) -> Self {
        Self(email)
    }

    pub fn email(&self) -> &ActorEmail {
        &self.0
    }

    fn resolve(req: &HttpRequest) -> Result<Self, ServiceError> {
        if let Some(value) = req.headers().get(ACTOR_HEADER) {
            let invalid = || ServiceError::Form(format!("invalid {ACTOR_HEADER} header"));
            let raw = value.to_str().map_err(|_| invalid())?;
            return ActorEmail::new(raw).map(Self).map_err(|_| invalid());
        }

        let config = req.app_data::<web::Data<ServerConfig>>().ok_or_else(|| {
            ServiceError::Internal("server configuration is not registered".to_string())
        })?;

        ActorEmail::new(config.default_actor.as_str())
            .map(Self)
            .map_err(|err| ServiceError::Internal(format!("invalid default actor: {err}")))
    }
}

impl FromRequest for Actor {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::resolve(req))
    }
}
