//! Wire JSON structs and the owned result types handed back to the caller.
//!
//! Field names and casing here are protocol-visible: they must match exactly what the
//! browser's `u2f.register`/`u2f.sign` JavaScript functions and the resulting responses use.

use serde::{Deserialize, Serialize};

/// A registration challenge to send to the `u2f.register` function in the browser.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationChallenge {
    pub challenge: String,
    pub version: String,
    pub app_id: String,
}

/// The response received from a successful `u2f.register` call in the browser.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub registration_data: String,
    pub client_data: String,
}

/// An authentication challenge to send to the `u2f.sign` function in the browser.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationChallenge {
    pub key_handle: String,
    pub version: String,
    pub challenge: String,
    pub app_id: String,
}

/// The response received from a successful `u2f.sign` call in the browser.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub signature_data: String,
    pub client_data: String,
    pub key_handle: String,
}

/// The subset of the decoded `clientData` JSON this protocol actually uses; other fields
/// (such as `typ`) are ignored.
#[derive(Deserialize)]
pub(crate) struct ClientData {
    pub challenge: String,
    pub origin: String,
}

/// The outcome of a successful registration verification.
#[derive(Clone, Debug)]
pub struct RegistrationResult {
    /// Base64URL-encoded newly issued credential id. Remember this and send it back as
    /// `keyHandle` in future authentication challenges.
    pub key_handle: String,

    /// Raw 65-byte (`0x04 || X || Y`) user EC public key. Remember this; it is required to
    /// verify future authentication responses.
    pub public_key: Vec<u8>,

    /// The device's attestation X.509 certificate, in PEM text.
    pub attestation_certificate_pem: String,
}

/// The outcome of a successful authentication verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// The device's monotonic authentication counter.
    pub counter: u32,

    /// The raw user-presence byte; the low bit is always set (a clear bit is rejected before
    /// a result is ever produced), but higher bits are vendor-specific and passed through.
    pub user_presence: u8,
}
