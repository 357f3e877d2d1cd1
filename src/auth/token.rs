use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

/// Sessions expire exactly one day after issuance.
pub const SESSION_TTL: Duration = Duration::days(1);

/// JWT payload carried by the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: usize,
    pub exp: usize,
}

/// Why a token failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token could not be parsed")]
    Malformed,
}

/// Signing and verification keys derived from the server secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed session token for `user_id`.
    pub fn sign(&self, user_id: Uuid) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + SESSION_TTL;
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "session token signed");
        Ok(token)
    }

    /// Check signature and expiry, returning the embedded user id.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        debug!(user_id = %data.claims.sub, "session token verified");
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> TokenKeys {
        TokenKeys::new("test-secret")
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id).expect("sign token");
        assert_eq!(keys.verify(&token), Ok(user_id));
    }

    #[test]
    fn token_lives_one_day() {
        let keys = make_keys();
        let token = keys.sign(Uuid::new_v4()).expect("sign token");

        // Decode without expiry checks to inspect the raw claims.
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.insecure_disable_signature_validation();
        let data = decode::<Claims>(&token, &DecodingKey::from_secret(b""), &validation)
            .expect("decode claims");
        assert_eq!(
            data.claims.exp - data.claims.iat,
            SESSION_TTL.whole_seconds() as usize
        );
    }

    #[test]
    fn verify_rejects_foreign_signature() {
        let keys = make_keys();
        let other = TokenKeys::new("another-secret");
        let token = other.sign(Uuid::new_v4()).expect("sign token");
        assert_eq!(keys.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn verify_rejects_garbage_as_malformed() {
        let keys = make_keys();
        assert_eq!(keys.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(keys.verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys();
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: (now - SESSION_TTL - Duration::hours(1)).unix_timestamp() as usize,
            exp: (now - Duration::hours(1)).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode claims");
        assert_eq!(keys.verify(&token), Err(TokenError::Expired));
    }
}
