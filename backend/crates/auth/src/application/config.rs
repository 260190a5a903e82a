//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

use crate::domain::kind::PrincipalKind;

/// Session token lifetime (1 day)
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for JWT signing
    pub jwt_secret: Vec<u8>,
    /// Token lifetime in seconds; also used as cookie Max-Age
    pub token_ttl_secs: i64,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Cookie path
    pub cookie_path: String,
}

impl AuthConfig {
    /// Create config with an explicit secret (production)
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: TOKEN_TTL_SECS,
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            cookie_path: "/".to_string(),
        }
    }

    /// Create config for development (random secret, insecure cookie).
    ///
    /// The secret is regenerated on every start, so restarting the
    /// server invalidates all outstanding development sessions.
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            cookie_secure: false,
            ..Self::new(secret)
        }
    }

    /// Cookie settings for one principal domain
    pub fn cookie_config(&self, kind: PrincipalKind) -> CookieConfig {
        CookieConfig {
            name: kind.cookie_name().to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: self.cookie_path.clone(),
            max_age_secs: Some(self.token_ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_config_per_kind() {
        let config = AuthConfig::new(b"secret".to_vec());
        let admin = config.cookie_config(PrincipalKind::Admin);
        let user = config.cookie_config(PrincipalKind::User);
        assert_eq!(admin.name, "adminToken");
        assert_eq!(user.name, "userToken");
        assert!(admin.http_only);
        assert!(admin.secure);
        assert_eq!(admin.max_age_secs, Some(86_400));
    }

    #[test]
    fn test_development_is_insecure() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.jwt_secret.len(), 32);
    }
}
