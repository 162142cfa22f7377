//! Per-flow session state: the challenge, app id, origin, and (for authentication) the
//! previously registered key handle and public key.

use openssl::ec::EcKey;
use openssl::pkey::Public;
use openssl::rand::rand_bytes;

use crate::codec::{b64url_encode, is_base64url};
use crate::crypto::decode_user_key;
use crate::error::Error;
use crate::{CHALLENGE_ENCODED_LEN, CHALLENGE_RAW_LEN};

/// Holds the state for one registration or authentication flow.
///
/// A session is cheap to create and does not need to be explicitly torn down: dropping it
/// releases everything it owns, including any decoded `openssl` key handle.
#[derive(Default)]
pub struct SessionContext {
    challenge: Option<String>,
    app_id: Option<String>,
    origin: Option<String>,
    key_handle: Option<Vec<u8>>,
    user_key: Option<EcKey<Public>>,
}

impl SessionContext {
    /// Create a new, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicitly set the challenge. `s` must be exactly [`CHALLENGE_ENCODED_LEN`] characters
    /// long and drawn from the Base64URL alphabet, or this fails with [`Error::Challenge`] and
    /// leaves the session's prior challenge untouched.
    pub fn set_challenge(&mut self, s: impl Into<String>) -> Result<(), Error> {
        let s = s.into();
        if s.len() != CHALLENGE_ENCODED_LEN || !is_base64url(&s) {
            return Err(Error::Challenge);
        }
        self.challenge = Some(s);
        Ok(())
    }

    /// Set the key handle of a previously registered credential. Required before
    /// [`verify_authentication`](Self::verify_authentication) can succeed.
    pub fn set_key_handle(&mut self, key_handle: impl Into<Vec<u8>>) {
        self.key_handle = Some(key_handle.into());
    }

    /// Set the origin the browser's `clientData.origin` is expected to match.
    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = Some(origin.into());
    }

    /// Set the relying party's U2F AppID.
    pub fn set_app_id(&mut self, app_id: impl Into<String>) {
        self.app_id = Some(app_id.into());
    }

    /// Decode and store a previously registered user public key (raw 65-byte
    /// `0x04 || X || Y` form). Required before
    /// [`verify_authentication`](Self::verify_authentication) can succeed.
    pub fn set_public_key(&mut self, raw65: &[u8]) -> Result<(), Error> {
        self.user_key = Some(decode_user_key(raw65)?);
        Ok(())
    }

    pub fn challenge(&self) -> Option<&str> {
        self.challenge.as_deref()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn key_handle(&self) -> Option<&[u8]> {
        self.key_handle.as_deref()
    }

    pub fn user_key(&self) -> Option<&EcKey<Public>> {
        self.user_key.as_ref()
    }

    /// Ensure a challenge exists, drawing [`CHALLENGE_RAW_LEN`] random bytes from the system
    /// CSPRNG and Base64URL-encoding them if none has been set yet. Idempotent after the
    /// first call.
    pub fn ensure_challenge(&mut self) -> Result<&str, Error> {
        if self.challenge.is_none() {
            let mut raw = [0u8; CHALLENGE_RAW_LEN];
            rand_bytes(&mut raw)?;
            let encoded = b64url_encode(&raw);
            debug_assert_eq!(encoded.len(), CHALLENGE_ENCODED_LEN);
            log::trace!("generated new u2f challenge");
            self.challenge = Some(encoded);
        }
        Ok(self.challenge.as_deref().expect("just set"))
    }

    pub(crate) fn require_challenge(&self) -> Result<&str, Error> {
        self.challenge
            .as_deref()
            .ok_or_else(|| Error::Format("session has no challenge set".into()))
    }

    pub(crate) fn require_app_id(&self) -> Result<&str, Error> {
        self.app_id
            .as_deref()
            .ok_or_else(|| Error::Format("session has no app_id set".into()))
    }

    pub(crate) fn require_origin(&self) -> Result<&str, Error> {
        self.origin
            .as_deref()
            .ok_or_else(|| Error::Format("session has no origin set".into()))
    }

    pub(crate) fn require_user_key(&self) -> Result<&EcKey<Public>, Error> {
        self.user_key
            .as_ref()
            .ok_or_else(|| Error::Format("session has no registered public key".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_challenge_rejects_wrong_length() {
        let mut s = SessionContext::new();
        assert!(matches!(
            s.set_challenge("A".repeat(42)),
            Err(Error::Challenge)
        ));
        assert!(s.challenge().is_none());
    }

    #[test]
    fn set_challenge_accepts_right_length() {
        let mut s = SessionContext::new();
        let c = "A".repeat(CHALLENGE_ENCODED_LEN);
        s.set_challenge(c.clone()).unwrap();
        assert_eq!(s.challenge(), Some(c.as_str()));
    }

    #[test]
    fn set_challenge_does_not_clobber_on_failure() {
        let mut s = SessionContext::new();
        let c = "A".repeat(CHALLENGE_ENCODED_LEN);
        s.set_challenge(c.clone()).unwrap();
        assert!(s.set_challenge("too-short").is_err());
        assert_eq!(s.challenge(), Some(c.as_str()));
    }

    #[test]
    fn ensure_challenge_generates_exactly_once() {
        let mut s = SessionContext::new();
        let first = s.ensure_challenge().unwrap().to_string();
        assert_eq!(first.len(), CHALLENGE_ENCODED_LEN);
        assert!(is_base64url(&first));
        let second = s.ensure_challenge().unwrap().to_string();
        assert_eq!(first, second);
    }
}
