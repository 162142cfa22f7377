//! Server-side implementation of the U2F (Universal 2nd Factor) registration and
//! authentication protocol: challenge issuance, wire-format parsing, and ECDSA attestation /
//! signature verification.
//!
//! A flow is driven through a [`SessionContext`]: build a challenge, send it to the browser's
//! `u2f.register`/`u2f.sign` call, then hand the JSON response back to
//! [`SessionContext::verify_registration`] or [`SessionContext::verify_authentication`].

mod codec;
mod crypto;
mod error;
mod wire;

mod authentication;
mod registration;
mod session;
mod types;

pub use error::Error;
pub use session::SessionContext;
pub use types::{
    AuthenticationChallenge, AuthenticationResponse, AuthenticationResult, RegistrationChallenge,
    RegistrationResponse, RegistrationResult,
};

/// Length in bytes of a raw (pre-encoding) challenge.
pub const CHALLENGE_RAW_LEN: usize = 32;

/// Length in characters of a challenge once Base64URL-encoded (unpadded).
pub const CHALLENGE_ENCODED_LEN: usize = 43;

/// Length in bytes of a raw uncompressed P-256 public key (`0x04 || X || Y`).
pub const PUBLIC_KEY_RAW_LEN: usize = 65;

/// Length in bytes of a SHA-256 digest.
pub const HASH_LEN: usize = 32;

/// Length in bytes of the authentication counter.
pub const COUNTER_LEN: usize = 4;

/// The protocol version string every challenge and response carries.
pub const U2F_VERSION: &str = "U2F_V2";
