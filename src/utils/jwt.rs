//! Minimal HS256 JSON Web Token codec.
//!
//! Tokens have the compact `header.payload.signature` form, each segment
//! URL-safe base64 without padding. Only the `HS256` algorithm is accepted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Registered claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum JwtError {
    #[error("malformed token")]
    Malformed,
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

/// Issues and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct JwtCodec {
    secret: Vec<u8>,
    expiration_seconds: i64,
}

impl JwtCodec {
    pub fn new(secret: &str, expiration_seconds: i64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            expiration_seconds,
        }
    }

    pub fn expiration_seconds(&self) -> i64 {
        self.expiration_seconds
    }

    /// Issues a token for `subject` valid from now.
    pub fn issue(&self, subject: &str) -> String {
        self.issue_at(subject, Utc::now().timestamp())
    }

    pub fn issue_at(&self, subject: &str, now: i64) -> String {
        let header = Header {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        };
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.expiration_seconds,
        };

        let signing_input = format!(
            "{}.{}",
            encode_segment(&header),
            encode_segment(&claims)
        );
        let signature = URL_SAFE_NO_PAD.encode(self.sign(signing_input.as_bytes()));

        format!("{}.{}", signing_input, signature)
    }

    /// Verifies signature and expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(JwtError::Malformed);
        };

        let header: Header = decode_segment(header_b64)?;
        if header.alg != "HS256" {
            return Err(JwtError::UnsupportedAlgorithm(header.alg));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| JwtError::Malformed)?;

        let mut mac = self.mac();
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(claims_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| JwtError::InvalidSignature)?;

        let claims: Claims = decode_segment(claims_b64)?;
        if claims.exp <= now {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length")
    }

    fn sign(&self, input: &[u8]) -> Vec<u8> {
        let mut mac = self.mac();
        mac.update(input);
        mac.finalize().into_bytes().to_vec()
    }
}

fn encode_segment<T: Serialize>(value: &T) -> String {
    // Serializing plain structs of strings and integers cannot fail.
    let json = serde_json::to_vec(value).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, JwtError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| JwtError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| JwtError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_issue_and_verify() {
        let codec = JwtCodec::new(SECRET, 3600);
        let token = codec.issue_at("alice@example.com", 1_000);

        let claims = codec.verify_at(&token, 1_500).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 4_600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = JwtCodec::new(SECRET, 60);
        let token = codec.issue_at("alice@example.com", 1_000);

        assert_eq!(codec.verify_at(&token, 1_060), Err(JwtError::Expired));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let token = JwtCodec::new(SECRET, 60).issue_at("alice@example.com", 1_000);
        let other = JwtCodec::new("another-secret-another-secret-xx", 60);

        assert_eq!(
            other.verify_at(&token, 1_001),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let codec = JwtCodec::new(SECRET, 60);
        let token = codec.issue_at("alice@example.com", 1_000);
        let forged_claims = encode_segment(&Claims {
            sub: "admin@example.com".to_string(),
            iat: 1_000,
            exp: 9_999,
        });

        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);

        assert_eq!(
            codec.verify_at(&forged, 1_001),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        let codec = JwtCodec::new(SECRET, 60);

        assert_eq!(codec.verify_at("", 0), Err(JwtError::Malformed));
        assert_eq!(codec.verify_at("a.b", 0), Err(JwtError::Malformed));
        assert_eq!(codec.verify_at("a.b.c.d", 0), Err(JwtError::Malformed));
        assert_eq!(codec.verify_at("!!.??.**", 0), Err(JwtError::Malformed));
    }

    #[test]
    fn test_none_algorithm_rejected() {
        let codec = JwtCodec::new(SECRET, 60);
        let header = encode_segment(&Header {
            alg: "none".to_string(),
            typ: "JWT".to_string(),
        });
        let claims = encode_segment(&Claims {
            sub: "alice@example.com".to_string(),
            iat: 0,
            exp: 9_999,
        });

        assert_eq!(
            codec.verify_at(&format!("{}.{}.", header, claims), 1),
            Err(JwtError::UnsupportedAlgorithm("none".to_string()))
        );
    }
}
