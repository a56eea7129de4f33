/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited bearer tokens
 * that stand in for sessions. Tokens are stateless JWTs: nothing is
 * persisted server-side, so there is no revocation list - rotating the
 * signing secret invalidates every outstanding token at once.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Tokens are valid for 30 days from issuance.
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies bearer tokens with an HS256 secret.
///
/// The secret is process-wide configuration, loaded once at startup and
/// handed to this service by the composition root. It is never read from
/// the environment at call time and never compiled into the source.
#[derive(Clone)]
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionService {
    /// Build a session service from the configured signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed token for a user, expiring in 30 days.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.issue_with_validity(user_id, Duration::days(TOKEN_VALIDITY_DAYS))
    }

    fn issue_with_validity(&self, user_id: Uuid, validity: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and resolve it to the user ID it was issued for.
    ///
    /// Signature integrity is checked before expiry, so a tampered token is
    /// `TokenInvalid` even when its claims look expired. A well-signed token
    /// past its expiry is `TokenExpired`. Anything malformed (wrong
    /// structure, wrong algorithm, empty string, bad subject) is
    /// `TokenInvalid`.
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            },
        )?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::TokenInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("unit-test-secret")
    }

    #[test]
    fn test_issue_then_verify_resolves_subject() {
        let sessions = service();
        let user_id = Uuid::new_v4();

        let token = sessions.issue(user_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(sessions.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_token_embeds_expiry_after_issuance() {
        let sessions = service();
        let token = sessions.issue(Uuid::new_v4()).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("unit-test-secret".as_ref()),
            &Validation::default(),
        )
        .unwrap();
        assert!(data.claims.exp > data.claims.iat);
        assert_eq!(
            data.claims.exp - data.claims.iat,
            TOKEN_VALIDITY_DAYS * 24 * 60 * 60
        );
    }

    #[test]
    fn test_expired_token_is_token_expired() {
        let sessions = service();
        let token = sessions
            .issue_with_validity(Uuid::new_v4(), Duration::days(-1))
            .unwrap();

        assert!(matches!(
            sessions.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_token_invalid() {
        let token = service().issue(Uuid::new_v4()).unwrap();
        let other = SessionService::new("a-different-secret");

        assert!(matches!(other.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_tampered_signature_is_invalid_even_when_expired() {
        let sessions = service();
        let token = sessions
            .issue_with_validity(Uuid::new_v4(), Duration::days(-1))
            .unwrap();

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            sessions.verify(&tampered),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let sessions = service();
        assert!(matches!(
            sessions.verify(""),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(
            sessions.verify("invalid.token.here"),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(
            sessions.verify("not-even-a-jwt"),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_token_with_non_uuid_subject_is_invalid() {
        let claims = Claims {
            sub: "42".to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::days(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("unit-test-secret".as_ref()),
        )
        .unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }
}
