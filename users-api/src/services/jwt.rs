use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::models::SanitizedUser;
use crate::services::ServiceError;

/// JWT service for token generation and validation
///
/// The signing secret is fixed at construction; the service is cheap to
/// clone and safe to share across tasks.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry_minutes: i64,
}

/// Claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Email
    pub email: String,
    /// User ID
    pub id: i64,
    /// Username
    pub username: String,
    /// Authorization roles, order preserved from issuance
    pub roles: Vec<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Token response returned to the caller of `login`.
///
/// The token string is opaque to the orchestrator; only verifying
/// consumers decode it.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

impl JwtService {
    /// Create a new JWT service from the shared HS256 secret.
    pub fn new(config: &JwtConfig) -> Result<Self, anyhow::Error> {
        if config.secret.is_empty() {
            return Err(anyhow::anyhow!("JWT secret must not be empty"));
        }

        tracing::info!("JWT service initialized with HS256 secret");

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
        })
    }

    /// Sign identity and role claims into an access token.
    pub fn sign(&self, user: &SanitizedUser) -> Result<String, anyhow::Error> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.access_token_expiry_minutes);

        let claims = AccessTokenClaims {
            email: user.email.clone(),
            id: user.id,
            username: user.username.clone(),
            roles: user.roles.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to encode access token: {}", e))?;

        Ok(token)
    }

    /// Validate and decode an access token.
    ///
    /// Fails for malformed tokens, tokens signed with a different secret,
    /// and expired tokens (every issued token carries `exp`).
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, ServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| ServiceError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Get access token expiry in seconds (for client info)
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_minutes: 15,
        }
    }

    fn test_user() -> SanitizedUser {
        SanitizedUser {
            id: 1,
            email: "email".to_string(),
            username: "username".to_string(),
            roles: vec!["ADMIN".to_string(), "USER".to_string()],
        }
    }

    #[test]
    fn test_jwt_service_rejects_empty_secret() {
        let config = test_config("");
        assert!(JwtService::new(&config).is_err());
    }

    #[test]
    fn test_sign_and_decode_round_trip() -> Result<(), anyhow::Error> {
        let service = JwtService::new(&test_config("secret"))?;

        let token = service.sign(&test_user())?;
        assert!(!token.is_empty());

        let claims = service.decode(&token).expect("token should decode");
        assert_eq!(claims.email, "email");
        assert_eq!(claims.id, 1);
        assert_eq!(claims.username, "username");
        assert_eq!(claims.roles, vec!["ADMIN", "USER"]);
        assert!(claims.exp > claims.iat);

        Ok(())
    }

    #[test]
    fn test_decode_rejects_wrong_secret() -> Result<(), anyhow::Error> {
        let issuer = JwtService::new(&test_config("secret"))?;
        let verifier = JwtService::new(&test_config("other-secret"))?;

        let token = issuer.sign(&test_user())?;
        assert!(matches!(
            verifier.decode(&token),
            Err(ServiceError::InvalidToken)
        ));

        Ok(())
    }

    #[test]
    fn test_decode_rejects_tampered_token() -> Result<(), anyhow::Error> {
        let service = JwtService::new(&test_config("secret"))?;

        let mut token = service.sign(&test_user())?;
        // Flip a character in the signature segment
        let flipped = if token.ends_with('a') { 'b' } else { 'a' };
        token.pop();
        token.push(flipped);

        assert!(matches!(
            service.decode(&token),
            Err(ServiceError::InvalidToken)
        ));

        Ok(())
    }

    #[test]
    fn test_decode_rejects_garbage() -> Result<(), anyhow::Error> {
        let service = JwtService::new(&test_config("secret"))?;

        assert!(matches!(
            service.decode("not-a-jwt"),
            Err(ServiceError::InvalidToken)
        ));

        Ok(())
    }

    #[test]
    fn test_expiry_seconds() -> Result<(), anyhow::Error> {
        let service = JwtService::new(&test_config("secret"))?;
        assert_eq!(service.access_token_expiry_seconds(), 15 * 60);
        Ok(())
    }
}
