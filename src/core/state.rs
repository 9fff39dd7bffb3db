use std::sync::Arc;

use chrono::Duration;

use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::token::clock::SystemClock;
use crate::token::issuer::TokenIssuer;
use crate::token::registry::TokenRegistry;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) issuer: TokenIssuer,
    pub(crate) registry: Arc<TokenRegistry>,
    pub(crate) api_key: String,
}

impl AppState {
    pub(crate) fn new(config: &Args) -> Result<Self, ConfigError> {
        let clock = Arc::new(SystemClock);
        let lifetime = Duration::seconds(config.token_lifetime_secs as i64);

        Ok(AppState {
            issuer: TokenIssuer::new(&config.secret, lifetime, clock.clone())?,
            registry: Arc::new(TokenRegistry::new(&config.secret, clock)),
            api_key: config.api_key.clone(),
        })
    }
}
