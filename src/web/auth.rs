//! # Bearer Token Verification
//!
//! JWT verification and issuance for the request admission gate. The
//! verifier is pure and stateless: it answers "is this credential
//! well-formed and, in signed mode, correctly signed and unexpired" and
//! makes no authorization decision.
//!
//! Credential values are never logged or echoed back to the caller.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AuthConfig, AuthMode};

/// Throwaway signing secret for the insecure-unverified mode, where the
/// decoder ignores authenticity anyway.
const INSECURE_SIGNING_SECRET: &[u8] = b"insecure-unverified";

/// Admission errors for the bearer-token gate.
///
/// Both credential variants map to HTTP 401; they stay distinct internally
/// for diagnostics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or not `Bearer <non-empty token>`.
    #[error("missing bearer credential")]
    MissingCredential,

    /// Credential present but malformed, wrongly signed, or expired.
    #[error("invalid bearer credential")]
    InvalidCredential,

    /// Token issuance failed (serialization or signing).
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

/// Decoded credential payload: a key/value mapping with an optional `exp`.
///
/// Owned transiently by the request path; never cached across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(serde_json::Map<String, serde_json::Value>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.0.insert(key.into(), value);
    }

    /// Subject identifier, when the credential carries one.
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(|v| v.as_str())
    }

    /// Expiration instant as unix seconds, when present.
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get("exp").and_then(|v| v.as_i64())
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Claims {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// Verifies and issues bearer credentials under one mode/key/algorithm
/// pairing, fixed at construction. Symmetry invariant: every credential
/// `issue` produces passes `verify`.
#[derive(Clone)]
pub struct TokenVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    header: Header,
    default_ttl: Duration,
}

impl TokenVerifier {
    pub fn from_config(config: &AuthConfig) -> Self {
        let (encoding_key, decoding_key) = match &config.mode {
            AuthMode::Signed { key } => (
                EncodingKey::from_secret(key.as_bytes()),
                DecodingKey::from_secret(key.as_bytes()),
            ),
            AuthMode::InsecureUnverified => (
                EncodingKey::from_secret(INSECURE_SIGNING_SECRET),
                DecodingKey::from_secret(&[]),
            ),
        };

        let mut validation = Validation::new(config.algorithm);
        // `exp` is validated when present but is not required of foreign
        // tokens; every token we issue carries one.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        if config.mode.is_insecure() {
            warn!(
                "token verification running in insecure-unverified mode; \
                 signatures are NOT checked; never use this in production"
            );
            validation.insecure_disable_signature_validation();
        }

        Self {
            encoding_key,
            decoding_key,
            validation,
            header: Header::new(config.algorithm),
            default_ttl: config.default_token_ttl,
        }
    }

    /// Verify a bearer credential and return its decoded claims.
    ///
    /// Every decode, signature, structure, or expiry failure maps uniformly
    /// to `AuthError::InvalidCredential`; the underlying reason is kept out
    /// of the error so nothing about keys or token structure leaks to
    /// callers.
    pub fn verify(&self, credential: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(credential, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                debug!(error = %err, "bearer credential failed verification");
                AuthError::InvalidCredential
            })
    }

    /// Issue a signed credential for the given claims.
    ///
    /// Sets `exp = now + ttl`, defaulting to the configured token lifetime,
    /// and signs under the same key/algorithm pairing `verify` uses.
    pub fn issue(&self, mut claims: Claims, ttl: Option<Duration>) -> Result<String, AuthError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let expires_at = Utc::now().timestamp() + ttl.as_secs() as i64;
        claims.insert("exp", serde_json::json!(expires_at));

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|err| AuthError::Issuance(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;
    use serde_json::json;

    fn signed_config(key: &str) -> AuthConfig {
        AuthConfig {
            mode: AuthMode::Signed {
                key: key.to_string(),
            },
            algorithm: Algorithm::HS256,
            default_token_ttl: Duration::from_secs(3600),
        }
    }

    fn insecure_config() -> AuthConfig {
        AuthConfig {
            mode: AuthMode::InsecureUnverified,
            algorithm: Algorithm::HS256,
            default_token_ttl: Duration::from_secs(3600),
        }
    }

    #[test]
    fn issued_tokens_pass_their_own_verification() {
        let verifier = TokenVerifier::from_config(&signed_config("test-key"));

        let mut claims = Claims::new();
        claims.insert("sub", json!("user-001"));
        claims.insert("role", json!("ADMIN"));

        let token = verifier.issue(claims, None).unwrap();
        let decoded = verifier.verify(&token).unwrap();

        assert_eq!(decoded.subject(), Some("user-001"));
        assert_eq!(decoded.get("role"), Some(&json!("ADMIN")));
        assert!(decoded.expires_at().unwrap() >= Utc::now().timestamp());
    }

    #[test]
    fn malformed_tokens_fail_uniformly() {
        let verifier = TokenVerifier::from_config(&signed_config("test-key"));

        for garbage in ["", "not-a-token", "a.b", "a.b.c", "Bearer x"] {
            assert_eq!(verifier.verify(garbage), Err(AuthError::InvalidCredential));
        }
    }

    #[test]
    fn wrong_key_fails_verification() {
        let issuer = TokenVerifier::from_config(&signed_config("key-a"));
        let verifier = TokenVerifier::from_config(&signed_config("key-b"));

        let token = issuer.issue(Claims::new(), None).unwrap();
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn expired_tokens_fail_verification() {
        let verifier = TokenVerifier::from_config(&signed_config("test-key"));

        // jsonwebtoken applies a 60s default leeway; go well past it.
        let mut claims = Claims::new();
        claims.insert("exp", json!(Utc::now().timestamp() - 600));
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-key"),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn insecure_mode_skips_signature_but_not_expiry() {
        let signer = TokenVerifier::from_config(&signed_config("some-other-key"));
        let insecure = TokenVerifier::from_config(&insecure_config());

        let mut claims = Claims::new();
        claims.insert("sub", json!("user-002"));

        // A token signed under an unrelated key still decodes.
        let token = signer.issue(claims, None).unwrap();
        let decoded = insecure.verify(&token).unwrap();
        assert_eq!(decoded.subject(), Some("user-002"));

        // But an expired token is still rejected.
        let mut expired = Claims::new();
        expired.insert("exp", json!(Utc::now().timestamp() - 600));
        let token = encode(
            &Header::new(Algorithm::HS256),
            &expired,
            &EncodingKey::from_secret(b"whatever"),
        )
        .unwrap();
        assert_eq!(insecure.verify(&token), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn insecure_mode_issuance_round_trips() {
        let verifier = TokenVerifier::from_config(&insecure_config());
        let token = verifier.issue(Claims::new(), None).unwrap();
        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn explicit_ttl_overrides_default() {
        let verifier = TokenVerifier::from_config(&signed_config("test-key"));

        let token = verifier
            .issue(Claims::new(), Some(Duration::from_secs(60)))
            .unwrap();
        let decoded = verifier.verify(&token).unwrap();

        let exp = decoded.expires_at().unwrap();
        let now = Utc::now().timestamp();
        assert!(exp > now && exp <= now + 61);
    }
}
