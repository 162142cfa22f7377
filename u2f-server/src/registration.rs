//! Registration challenge issuance and response verification (SPEC_FULL.md §4.6).

use openssl::x509::X509;

use crate::codec::{b64_decode, b64url_encode};
use crate::crypto::{attestation_key, cert_to_pem, sha256, verify};
use crate::error::Error;
use crate::session::SessionContext;
use crate::types::{ClientData, RegistrationChallenge, RegistrationResponse, RegistrationResult};
use crate::U2F_VERSION;

impl SessionContext {
    /// Build a registration challenge object to send to the browser's `u2f.register` call.
    ///
    /// Generates a fresh challenge if the session does not already have one.
    pub fn registration_challenge(&mut self) -> Result<RegistrationChallenge, Error> {
        let app_id = self.require_app_id()?.to_owned();
        let challenge = self.ensure_challenge()?.to_owned();
        Ok(RegistrationChallenge {
            challenge,
            version: U2F_VERSION.to_owned(),
            app_id,
        })
    }

    /// Verify a JSON-encoded registration response string.
    ///
    /// Equivalent to `verify_registration_with(response, None)`.
    pub fn verify_registration(&mut self, response: &str) -> Result<RegistrationResult, Error> {
        self.verify_registration_with(response, None)
    }

    /// Verify a JSON-encoded registration response string, optionally running `validate_attestation`
    /// against the parsed attestation certificate before the signature is checked.
    ///
    /// This is the extension point the spec's source left as `// TODO Add certificate
    /// validation`: this crate has no opinion on attestation trust policy, so the caller
    /// supplies one if they need it.
    pub fn verify_registration_with(
        &mut self,
        response: &str,
        validate_attestation: Option<&dyn Fn(&X509) -> Result<(), Error>>,
    ) -> Result<RegistrationResult, Error> {
        let response: RegistrationResponse = serde_json::from_str(response)?;

        let registration_data = b64_decode(&response.registration_data)?;
        let parsed = crate::wire::parse_registration_data(&registration_data)?;

        let (attestation_cert, attestation_pubkey) = attestation_key(parsed.attestation_cert)?;

        if let Some(validate) = validate_attestation {
            validate(&attestation_cert)?;
        }

        let client_data_decoded = b64_decode(&response.client_data)?;
        let client_data: ClientData = serde_json::from_slice(&client_data_decoded)?;

        self.ensure_challenge()?;

        if client_data.challenge != self.challenge().expect("just ensured") {
            log::debug!("registration challenge mismatch");
            return Err(Error::Challenge);
        }

        if client_data.origin != self.require_origin()? {
            log::debug!("registration origin mismatch");
            return Err(Error::Origin);
        }

        let app_id = self.require_app_id()?;

        // Signed bytes (registration): 0x00 || SHA256(appId) || SHA256(clientData) || keyHandle
        // || userPublicKey. The leading domain-separator byte and the inclusion of the key
        // handle/public key are what distinguish this from the authentication signed bytes.
        let application_parameter = sha256(app_id.as_bytes());
        let challenge_parameter = sha256(&client_data_decoded);

        let mut signed = Vec::with_capacity(
            1 + application_parameter.len()
                + challenge_parameter.len()
                + parsed.key_handle.len()
                + parsed.user_public_key.len(),
        );
        signed.push(0u8);
        signed.extend_from_slice(&application_parameter);
        signed.extend_from_slice(&challenge_parameter);
        signed.extend_from_slice(parsed.key_handle);
        signed.extend_from_slice(parsed.user_public_key);
        let signed_hash = sha256(&signed);

        verify(&attestation_pubkey, &signed_hash, parsed.signature)?;

        // Round-trip sanity check: the raw user key must itself decode as a valid P-256 point.
        crate::crypto::decode_user_key(parsed.user_public_key)?;

        Ok(RegistrationResult {
            key_handle: b64url_encode(parsed.key_handle),
            public_key: parsed.user_public_key.to_vec(),
            attestation_certificate_pem: cert_to_pem(&attestation_cert)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Captured from a real hardware U2F token (a YubiKey), adapted to this crate's flattened
    // (non-nested) wire shape. Fixtures of this kind are the only reliable way to exercise the
    // exact DER/ECDSA machinery without reimplementing a token simulator.
    const TEST_APP_ID: &str = "https://u2ftest.enonet.errno.eu";
    const TEST_CHALLENGE: &str = "mZoWLngnAh8p98nPkFOIBXecd0CbmgEx5tEd5jNswgY";
    const TEST_CLIENT_DATA: &str = "eyJjaGFsbGVuZ2UiOiJtWm9XTG5nbkFoOHA5OG5Qa0ZPSUJYZWNkMENibWdFeDV0RWQ1ak5zd2dZIiwib3JpZ2luIjoiaHR0cHM6Ly91MmZ0ZXN0LmVub25ldC5lcnJuby5ldSIsInR5cCI6Im5hdmlnYXRvci5pZC5maW5pc2hFbnJvbGxtZW50In0";
    const TEST_REGISTRATION_DATA: &str = "BQR_9TmMowVeoAHp3ABljCa90eNG87t76D4Wc9nsmK9ihNhhYNxYIq9tnRUPTBZ2X4kZKSB0LXMm32lOKQlNB56QQHlt81cRBfID7BvHk_XIJZc5ks5D3R1ZV11fJudp3F-ii_KSdZaFb4cGaq0rEaVDfNR2ZR0T0ApMMCeTIaDAJRQwggJEMIIBLqADAgECAgRVYr6gMAsGCSqGSIb3DQEBCzAuMSwwKgYDVQQDEyNZdWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAwMDBaGA8yMDUwMDkwNDAwMDAwMFowKjEoMCYGA1UEAwwfWXViaWNvIFUyRiBFRSBTZXJpYWwgMTQzMjUzNDY4ODBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABEszH3c9gUS5mVy-RYVRfhdYOqR2I2lcvoWsSCyAGfLJuUZ64EWw5m8TGy6jJDyR_aYC4xjz_F2NKnq65yvRQwmjOzA5MCIGCSsGAQQBgsQKAgQVMS4zLjYuMS40LjEuNDE0ODIuMS41MBMGCysGAQQBguUcAgEBBAQDAgUgMAsGCSqGSIb3DQEBCwOCAQEArBbZs262s6m3bXWUs09Z9Pc-28n96yk162tFHKv0HSXT5xYU10cmBMpypXjjI-23YARoXwXn0bm-BdtulED6xc_JMqbK-uhSmXcu2wJ4ICA81BQdPutvaizpnjlXgDJjq6uNbsSAp98IStLLp7fW13yUw-vAsWb5YFfK9f46Yx6iakM3YqNvvs9M9EUJYl_VrxBJqnyLx2iaZlnpr13o8NcsKIJRdMUOBqt_ageQg3ttsyq_3LyoNcu7CQ7x8NmeCGm_6eVnZMQjDmwFdymwEN4OxfnM5MkcKCYhjqgIGruWkVHsFnJa8qjZXneVvKoiepuUQyDEJ2GcqvhU2YKY1zBFAiEA2mcfAS2XRcWy1lLJikFHGJSbtOrrwswjOKEzwp6EonkCIFBxbLAmwUnblAWOVELASi610ZfPK-7qx2VwkWfHqnll";

    fn response_json() -> String {
        format!(
            r#"{{"registrationData":"{}","clientData":"{}"}}"#,
            TEST_REGISTRATION_DATA, TEST_CLIENT_DATA
        )
    }

    #[test]
    fn verifies_real_registration_response() {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin(TEST_APP_ID);
        session.set_challenge(TEST_CHALLENGE).unwrap();

        let result = session.verify_registration(&response_json()).unwrap();
        assert_eq!(result.public_key.len(), 65);
        assert!(result.attestation_certificate_pem.contains("BEGIN CERTIFICATE"));
    }

    #[test]
    fn rejects_origin_mismatch_before_crypto() {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin("https://evil.example.com");
        session.set_challenge(TEST_CHALLENGE).unwrap();

        let err = session.verify_registration(&response_json()).unwrap_err();
        assert!(matches!(err, Error::Origin));
    }

    #[test]
    fn rejects_challenge_mismatch() {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin(TEST_APP_ID);
        session
            .set_challenge("Z".repeat(crate::CHALLENGE_ENCODED_LEN))
            .unwrap();

        let err = session.verify_registration(&response_json()).unwrap_err();
        assert!(matches!(err, Error::Challenge));
    }

    #[test]
    fn rejects_wrong_reserved_byte() {
        let mut session = SessionContext::new();
        session.set_app_id(TEST_APP_ID);
        session.set_origin(TEST_APP_ID);
        session.set_challenge(TEST_CHALLENGE).unwrap();

        let mut bytes = b64_decode(TEST_REGISTRATION_DATA).unwrap();
        bytes[0] = 0x04;
        let tampered_b64 = proxmox_base64::encode(&bytes);
        let body = format!(
            r#"{{"registrationData":"{}","clientData":"{}"}}"#,
            tampered_b64, TEST_CLIENT_DATA
        );

        let err = session.verify_registration(&body).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
