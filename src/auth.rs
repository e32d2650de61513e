use crate::config::TOKEN_TTL_MINUTES;
use crate::error::AuthError;
use crate::models::Claims;
use actix_web::{dev::ServiceRequest, web, Error, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{error, warn};

/// Signs and verifies HS256 tokens with a single process-wide key.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::minutes(TOKEN_TTL_MINUTES),
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(username, Utc::now())
    }

    /// Same username and instant always yield the same token.
    pub fn issue_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let expiration = (now + self.ttl).timestamp().max(0) as usize;

        let claims = Claims {
            username: username.to_owned(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default()).map(|data| data.claims)
    }
}

/// Bearer validator for protected routes. Valid claims are stored in the
/// request extensions.
pub async fn validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let outcome = req
        .app_data::<web::Data<TokenIssuer>>()
        .map(|issuer| issuer.validate(credentials.token()));

    match outcome {
        Some(Ok(claims)) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Some(Err(e)) => {
            warn!(error = %e, path = %req.path(), "Rejected bearer token");
            Err((AuthError::InvalidToken.into(), req))
        }
        None => {
            error!("TokenIssuer missing from app data");
            Err((
                actix_web::error::ErrorInternalServerError("Token issuer not configured"),
                req,
            ))
        }
    }
}
