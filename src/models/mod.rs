//! Database and request-scoped models shared across the customer service.

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod customer;
