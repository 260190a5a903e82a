//! Token Issuer
//!
//! Issues and verifies the HS256 JWTs that carry a session. Each token
//! holds exactly one of the two claim keys (`adminId` or `userId`), so
//! a token minted for one domain can never authenticate in the other.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::PrincipalId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::kind::PrincipalKind;

/// Token verification/signing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
    #[error("token carries the wrong claim key")]
    WrongDomain,
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// JWT claim set. The id claim keys are mutually exclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "adminId", skip_serializing_if = "Option::is_none", default)]
    pub admin_id: Option<Uuid>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

impl Claims {
    /// Build a claim set for one principal
    pub fn for_principal(kind: PrincipalKind, id: PrincipalId, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        let (admin_id, user_id) = match kind {
            PrincipalKind::Admin => (Some(id.into_uuid()), None),
            PrincipalKind::User => (None, Some(id.into_uuid())),
        };
        Self {
            admin_id,
            user_id,
            iat: now,
            exp: now + ttl_secs,
        }
    }
}

/// Signs and verifies session tokens with a single HMAC secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_secs)
    }

    /// Issue a signed token for one principal
    pub fn issue(&self, kind: PrincipalKind, id: PrincipalId) -> Result<String, TokenError> {
        let claims = Claims::for_principal(kind, id, self.ttl_secs);
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token without regard to domain
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        Ok(data.claims)
    }

    /// Verify a token and require the claim key of the given domain
    pub fn verify_for(
        &self,
        kind: PrincipalKind,
        token: &str,
    ) -> Result<PrincipalId, TokenError> {
        let claims = self.verify(token)?;
        let id = match kind {
            PrincipalKind::Admin => claims.admin_id,
            PrincipalKind::User => claims.user_id,
        };
        id.map(PrincipalId::from_uuid).ok_or(TokenError::WrongDomain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = issuer();
        let id = PrincipalId::new();
        let token = issuer.issue(PrincipalKind::Admin, id).unwrap();
        let verified = issuer.verify_for(PrincipalKind::Admin, &token).unwrap();
        assert_eq!(verified, id);
    }

    #[test]
    fn test_cross_domain_token_rejected() {
        let issuer = issuer();
        let id = PrincipalId::new();
        let admin_token = issuer.issue(PrincipalKind::Admin, id).unwrap();
        let err = issuer
            .verify_for(PrincipalKind::User, &admin_token)
            .unwrap_err();
        assert_eq!(err, TokenError::WrongDomain);

        let user_token = issuer.issue(PrincipalKind::User, id).unwrap();
        let err = issuer
            .verify_for(PrincipalKind::Admin, &user_token)
            .unwrap_err();
        assert_eq!(err, TokenError::WrongDomain);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let id = PrincipalId::new();
        let token = issuer().issue(PrincipalKind::User, id).unwrap();
        let other = TokenIssuer::new(b"other-secret", 3600);
        assert_eq!(
            other.verify_for(PrincipalKind::User, &token).unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn test_expired_token_is_distinct_from_invalid() {
        let issuer = TokenIssuer::new(b"test-secret", -120);
        let id = PrincipalId::new();
        let token = issuer.issue(PrincipalKind::User, id).unwrap();
        assert_eq!(
            issuer.verify_for(PrincipalKind::User, &token).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            issuer().verify("not.a.jwt").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn test_claims_serialize_single_key() {
        let id = PrincipalId::new();
        let claims = Claims::for_principal(PrincipalKind::Admin, id, 60);
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("adminId").is_some());
        assert!(json.get("userId").is_none());
    }
}
