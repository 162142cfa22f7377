//! Authentication challenge issuance and response verification (SPEC_FULL.md §4.7).

use crate::codec::b64_decode;
use crate::crypto::{sha256, verify};
use crate::error::Error;
use crate::session::SessionContext;
use crate::types::{AuthenticationChallenge, AuthenticationResponse, AuthenticationResult, ClientData};
use crate::U2F_VERSION;

impl SessionContext {
    /// Build an authentication challenge object to send to the browser's `u2f.sign` call.
    ///
    /// Requires a key handle to already be set on the session (via
    /// [`SessionContext::set_key_handle`]) — this is the credential the browser is being asked
    /// to assert.
    pub fn authentication_challenge(&mut self) -> Result<AuthenticationChallenge, Error> {
        let app_id = self.require_app_id()?.to_owned();
        let key_handle = self
            .key_handle()
            .ok_or_else(|| Error::Format("session has no key_handle set".into()))?;
        let key_handle = crate::codec::b64url_encode(key_handle);
        let challenge = self.ensure_challenge()?.to_owned();
        Ok(AuthenticationChallenge {
            key_handle,
            version: U2F_VERSION.to_owned(),
            challenge,
            app_id,
        })
    }

    /// Verify a JSON-encoded authentication response string.
    ///
    /// The session must already have an app id, origin, challenge, and the registered public
    /// key (via [`SessionContext::set_public_key`]) set.
    pub fn verify_authentication(&mut self, response: &str) -> Result<AuthenticationResult, Error> {
        let response: AuthenticationResponse = serde_json::from_str(response)?;

        let signature_data = b64_decode(&response.signature_data)?;
        let parsed = crate::wire::parse_signature_data(&signature_data)?;

        let client_data_decoded = b64_decode(&response.client_data)?;
        let client_data: ClientData = serde_json::from_slice(&client_data_decoded)?;

        if client_data.challenge != self.require_challenge()? {
            log::debug!("authentication challenge mismatch");
            return Err(Error::Challenge);
        }

        if client_data.origin != self.require_origin()? {
            log::debug!("authentication origin mismatch");
            return Err(Error::Origin);
        }

        let app_id = self.require_app_id()?;
        let user_key = self.require_user_key()?;

        // Signed bytes (authentication): SHA256(appId) || userPresence || counter (big-endian)
        // || SHA256(clientData). Unlike registration there is no leading domain-separator byte
        // and no key handle / public key material folded in — the key handle already selected
        // which key to verify under, and the public key is the verification key itself, not
        // signed-over data.
        let application_parameter = sha256(app_id.as_bytes());
        let challenge_parameter = sha256(&client_data_decoded);

        let mut signed = Vec::with_capacity(
            application_parameter.len() + 1 + parsed.counter.len() + challenge_parameter.len(),
        );
        signed.extend_from_slice(&application_parameter);
        signed.push(parsed.user_presence);
        signed.extend_from_slice(&parsed.counter);
        signed.extend_from_slice(&challenge_parameter);
        let signed_hash = sha256(&signed);

        verify(user_key, &signed_hash, parsed.signature)?;

        Ok(AuthenticationResult {
            counter: u32::from_be_bytes(parsed.counter),
            user_presence: parsed.user_presence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Captured from a real hardware U2F token (a YubiKey) performing an authentication
    // against a previously registered credential, adapted to this crate's flattened wire
    // shape. Same device/app id as the registration fixture in `registration.rs`.
    const TEST_APP_ID: &str = "https://u2ftest.enonet.errno.eu";
    const TEST_CHALLENGE: &str = "8LE_-7Rd1vB3Otn3vJ7GyiwRQtYPMv-BWliCejH0d4Y";
    const TEST_CLIENT_DATA: &str = "eyJjaGFsbGVuZ2UiOiI4TEVfLTdSZDF2QjNPdG4zdko3R3lpd1JRdFlQTXYtQldsaUNlakgwZDRZIiwib3JpZ2luIjoiaHR0cHM6Ly91MmZ0ZXN0LmVub25ldC5lcnJuby5ldSIsInR5cCI6Im5hdmlnYXRvci5pZC5nZXRBc3NlcnRpb24ifQ";
    const TEST_KEY_HANDLE: &str = "eW3zVxEF8gPsG8eT9cgllzmSzkPdHVlXXV8m52ncX6KL8pJ1loVvhwZqrSsRpUN81HZlHRPQCkwwJ5MhoMAlFA";
    const TEST_SIGNATURE_DATA: &str = "AQAAAQEwRAIgKdM9cmCLZDxntY-dT_OXbcVA1D5ewQunXVC-CYZ65pUCIAIOUBsu-dOmTym0ITZt6x75BFUSGlqYRuH5JKBcyO3M";
    const TEST_PUBLIC_KEY: &str = "BH/1OYyjBV6gAencAGWMJr3R40bzu3voPhZz2eyYr2KE2GFg3Fgir22dFQ9MFnZfiRkpIHQtcybfaU4pCU0HnpA=";

    fn registered_session() -> SessionContext {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin(TEST_APP_ID);
        session.set_challenge(TEST_CHALLENGE).unwrap();
        let key_handle = b64_decode(TEST_KEY_HANDLE).unwrap();
        session.set_key_handle(key_handle);
        let public_key = b64_decode(TEST_PUBLIC_KEY).unwrap();
        session.set_public_key(&public_key).unwrap();
        session
    }

    fn response_json() -> String {
        format!(
            r#"{{"signatureData":"{}","clientData":"{}","keyHandle":"{}"}}"#,
            TEST_SIGNATURE_DATA, TEST_CLIENT_DATA, TEST_KEY_HANDLE
        )
    }

    #[test]
    fn verifies_real_authentication_response() {
        let mut session = registered_session();
        let result = session.verify_authentication(&response_json()).unwrap();
        assert_eq!(result.user_presence & 0x01, 1);
        assert_eq!(result.counter, 257);
    }

    #[test]
    fn rejects_without_registered_public_key() {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin(TEST_APP_ID);
        session.set_challenge(TEST_CHALLENGE).unwrap();
        let key_handle = b64_decode(TEST_KEY_HANDLE).unwrap();
        session.set_key_handle(key_handle);
        // No set_public_key call: require_user_key must fail before any crypto runs, even
        // though the response itself is otherwise well-formed and would verify.
        let err = session.verify_authentication(&response_json()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn authentication_signed_bytes_have_no_leading_reserved_byte_or_key_material() {
        // Regression for the registration/authentication asymmetry: unlike
        // registration_verify's signed bytes, authentication signs only
        // appIdHash || presence || counter || clientDataHash — 32 + 1 + 4 + 32 = 69 bytes.
        let app_id_hash = sha256(b"https://example.test");
        let client_data_hash = sha256(b"{}");
        let mut signed = Vec::new();
        signed.extend_from_slice(&app_id_hash);
        signed.push(1);
        signed.extend_from_slice(&[0, 0, 0, 7]);
        signed.extend_from_slice(&client_data_hash);
        assert_eq!(signed.len(), 32 + 1 + 4 + 32);
        assert_ne!(signed[0], 0, "authentication signed bytes must not start with a 0x00 domain separator");
    }
}
