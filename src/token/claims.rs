use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;

pub(crate) const ISSUER: &str = "tollgate";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Claims {
    pub(crate) jti: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
    pub(crate) iss: String,
}

pub(crate) fn encode(claims: &Claims, key: &EncodingKey) -> Result<String, Error> {
    Ok(jsonwebtoken::encode(&Header::default(), claims, key)?)
}

/// Signature and issuer validation only. Expiry is deliberately not checked
/// here; the registry compares `exp` against its own clock, which is the
/// single authority on the validity window.
pub(crate) fn decode(token: &str, key: &DecodingKey) -> Result<TokenData<Claims>, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    Ok(jsonwebtoken::decode::<Claims>(token, key, &validation)?)
}
