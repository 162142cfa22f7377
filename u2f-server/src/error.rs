//! The `Error` type returned by every fallible operation in this crate.

use std::fmt;

use openssl::error::ErrorStack as SslErrorStack;

/// Error types returned by this crate.
#[derive(Debug)]
#[must_use = "unused errors have no effect"]
pub enum Error {
    /// A JSON document could not be parsed, or was missing a required string field.
    Json(serde_json::Error),

    /// A wire-level value was malformed: a reserved byte had the wrong value, a length field
    /// was out of range, the user-presence bit was clear, or a Base64 payload did not decode
    /// under either alphabet.
    Format(String),

    /// `set_challenge` was given a string of the wrong length, or the challenge echoed back in
    /// a response did not match the session's challenge.
    Challenge,

    /// The origin echoed back in a response did not match the session's origin.
    Origin,

    /// An openssl error occurred while decoding a key, decoding a certificate, or verifying a
    /// signature.
    Crypto(SslErrorStack),

    /// A signature was well-formed and decoded fine, but did not verify against the expected
    /// key and digest. Distinguished from [`Error::Crypto`] so callers can tell "the token's
    /// signature was bad" from "our crypto stack broke".
    SignatureRejected,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Json(err) => fmt::Display::fmt(err, f),
            Error::Format(err) => write!(f, "malformed u2f wire data: {}", err),
            Error::Challenge => f.write_str("challenge mismatch or invalid challenge length"),
            Error::Origin => f.write_str("origin mismatch"),
            Error::Crypto(err) => fmt::Display::fmt(err, f),
            Error::SignatureRejected => f.write_str("signature verification failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Crypto(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SslErrorStack> for Error {
    fn from(e: SslErrorStack) -> Self {
        Error::Crypto(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<proxmox_base64::DecodeError> for Error {
    fn from(e: proxmox_base64::DecodeError) -> Self {
        Error::Format(format!("invalid base64: {}", e))
    }
}
