//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its store.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Identity recorded as creator/updater when a request carries no actor header.
    pub default_actor: String,
}
