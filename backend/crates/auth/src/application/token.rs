//! Session Token
//!
//! Signed session tokens of the form `{session_id}.{signature}` where the
//! signature is an HMAC-SHA256 over the session id, base64url-encoded
//! without padding. The token proves the session id was issued by this
//! server; the session itself is looked up server-side.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session id into a token string
pub fn sign_session_token(session_id: Uuid, secret: &[u8; 32]) -> String {
    let id_str = session_id.to_string();
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(id_str.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("{id_str}.{signature}")
}

/// Verify a token string and extract the session id
///
/// Returns `SessionInvalid` for malformed tokens, bad signatures, or
/// non-UUID session ids. The error carries no detail about which check
/// failed.
pub fn verify_session_token(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
    let (id_str, signature_b64) = token
        .split_once('.')
        .ok_or(AuthError::SessionInvalid)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(id_str.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    Uuid::parse_str(id_str).map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_and_verify_round_trip() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(session_id, &SECRET);
        let verified = verify_session_token(&token, &SECRET).unwrap();
        assert_eq!(verified, session_id);
    }

    #[test]
    fn test_tampered_session_id_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(session_id, &SECRET);
        let other_id = Uuid::new_v4();
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{other_id}.{signature}");
        assert!(matches!(
            verify_session_token(&forged, &SECRET),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(session_id, &SECRET);
        let other_secret = [9u8; 32];
        assert!(verify_session_token(&token, &other_secret).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(verify_session_token("not-a-token", &SECRET).is_err());
        assert!(verify_session_token("", &SECRET).is_err());
        assert!(verify_session_token("a.b.c", &SECRET).is_err());
        assert!(verify_session_token("abc.!!!", &SECRET).is_err());
    }
}
