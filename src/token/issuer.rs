use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::EncodingKey;
use uuid::Uuid;

use crate::core::error::{ConfigError, Error};
use crate::token::claims::{self, Claims, ISSUER};
use crate::token::clock::Clock;

#[derive(Clone)]
pub(crate) struct TokenIssuer {
    encoding_key: EncodingKey,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

impl TokenIssuer {
    pub(crate) fn new(
        secret: &str,
        lifetime: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            lifetime,
            clock,
        })
    }

    /// Mint a fresh single-use token. Stateless: the registry only learns
    /// about a token when it is first presented.
    pub(crate) fn issue(&self) -> Result<String, Error> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.lifetime;

        let claims = Claims {
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: ISSUER.into(),
        };

        claims::encode(&claims, &self.encoding_key)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use jsonwebtoken::DecodingKey;

    use super::*;
    use crate::token::clock::test::ManualClock;

    const SECRET: &str = "issuer-test-secret";

    fn make_issuer() -> TokenIssuer {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));

        TokenIssuer::new(SECRET, Duration::seconds(300), clock).unwrap()
    }

    #[test]
    fn test_issued_tokens_are_unique() {
        let issuer = make_issuer();
        let key = DecodingKey::from_secret(SECRET.as_bytes());

        let first = claims::decode(&issuer.issue().unwrap(), &key).unwrap();
        let second = claims::decode(&issuer.issue().unwrap(), &key).unwrap();

        assert_ne!(first.claims.jti, second.claims.jti);
    }

    #[test]
    fn test_expiry_is_lifetime_after_issuance() {
        let issuer = make_issuer();
        let key = DecodingKey::from_secret(SECRET.as_bytes());

        let token = issuer.issue().unwrap();
        let claims = claims::decode(&token, &key).unwrap().claims;

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp - claims.iat, 300);
        assert_eq!(claims.iss, ISSUER);
    }

    #[test]
    fn test_empty_secret_is_a_config_error() {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));

        let result = TokenIssuer::new("", Duration::seconds(300), clock);

        assert!(matches!(result, Err(ConfigError::EmptySecret)));
    }
}
