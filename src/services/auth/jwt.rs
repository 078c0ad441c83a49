use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    error::{AppError, Result},
};

/// Token issuance lives in the identity provider; this service only mints
/// tokens for tooling and validates what callers present.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub exp: u64,
    pub iat: u64,
    pub jti: String,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
}

impl JwtService {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            access_ttl: jwt_config.access_token_ttl,
        }
    }

    pub fn create_access_token(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now().timestamp() as u64;

        let claims = JwtClaims {
            sub: user_id,
            exp: now + self.access_ttl.as_secs(),
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<JwtClaims> {
        let validation = Validation::default();

        let data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::Unauthorized,
                }
            })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use uuid::Uuid;

    use super::JwtService;
    use crate::{config::JwtConfig, error::AppError};

    fn service() -> JwtService {
        JwtService::new(&JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".into(),
            access_token_ttl: Duration::from_secs(900),
        })
    }

    #[test]
    fn round_trips_the_subject() {
        let jwt = service();
        let user_id = Uuid::new_v4();

        let token = jwt.create_access_token(user_id).unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn rejects_garbage_tokens() {
        let jwt = service();

        assert!(matches!(
            jwt.validate_token("not-a-token"),
            Err(AppError::Unauthorized)
        ));
    }
}
