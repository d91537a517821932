//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use dochub_core::config::auth::AuthConfig;
use dochub_core::error::AppError;

use super::claims::Claims;

/// Validates identity tokens.
///
/// Verification is purely local (signature + expiry). There is no
/// server-side revocation list; a token stays valid until it expires.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature validity and expiration. Failures never panic;
    /// they are returned as `Unauthenticated` errors whose messages are
    /// surfaced verbatim by the verify endpoint.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthenticated("Invalid token format")
                    }
                    _ => AppError::unauthenticated(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use dochub_core::config::auth::AuthConfig;

    use super::*;
    use crate::jwt::encoder::JwtEncoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_ttl_hours: 72,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let (token, exp) = encoder.issue(user_id, "ada@example.com", "ada").unwrap();
        let claims = decoder.verify(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.exp, exp.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_ttl_is_72_hours() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let before = Utc::now();
        let (_, exp) = encoder.issue(Uuid::new_v4(), "a@b.c", "a").unwrap();
        let after = Utc::now();

        // exp is 72h after some instant between `before` and `after`.
        assert!(exp - before >= chrono::Duration::hours(72));
        assert!(exp - after <= chrono::Duration::hours(72));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "old@example.com".to_string(),
            username: "old".to_string(),
            iat: now - 80 * 3600,
            exp: now - 8 * 3600, // issued >72h ago, expired 8h ago
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let (token, _) = encoder.issue(Uuid::new_v4(), "a@b.c", "a").unwrap();

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token signature");
    }

    #[test]
    fn test_malformed_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder.verify("not-a-jwt").unwrap_err();
        assert_eq!(err.message, "Invalid token format");
    }
}
