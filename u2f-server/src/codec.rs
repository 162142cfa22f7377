//! Base64 / Base64URL helpers for the wire payloads.
//!
//! The fields the server itself produces (`challenge`, `key_handle`) are always emitted as
//! true, unpadded Base64URL. The fields a browser/token sends back (`registrationData`,
//! `clientData`, `signatureData`) are decoded leniently: some deployments of this protocol
//! have historically applied the standard (non-URL) alphabet to these fields even though real
//! tokens use Base64URL, so we try the standard alphabet first and fall back to Base64URL
//! rather than rejecting genuine responses.

use crate::error::Error;

/// Encode bytes as unpadded Base64URL (RFC 4648 §5).
pub fn b64url_encode(data: &[u8]) -> String {
    proxmox_base64::url::encode_no_pad(data)
}

/// Decode a wire payload, trying standard Base64 first and Base64URL second.
pub fn b64_decode(data: &str) -> Result<Vec<u8>, Error> {
    if let Ok(bytes) = proxmox_base64::decode(data) {
        return Ok(bytes);
    }
    proxmox_base64::url::decode(data)
        .map_err(|err| Error::Format(format!("invalid base64 payload: {}", err)))
}

/// `true` if `s` consists solely of characters from the Base64URL alphabet (no padding).
pub fn is_base64url(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_url_safe_and_unpadded() {
        let data = [0xffu8, 0xfe, 0xfd, 0x00, 0x01];
        let encoded = b64url_encode(&data);
        assert!(!encoded.contains('='));
        assert!(is_base64url(&encoded));
    }

    #[test]
    fn decode_accepts_standard_alphabet() {
        let standard = "aGVsbG8gd29ybGQ+Lw=="; // "hello world>/" with '+' and '/'
        assert_eq!(b64_decode(standard).unwrap(), b"hello world>/");
    }

    #[test]
    fn decode_accepts_url_alphabet() {
        let urlish = "aGVsbG8gd29ybGQ-Lw"; // same payload, URL-safe, unpadded
        assert_eq!(b64_decode(urlish).unwrap(), b"hello world>/");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(b64_decode("not base64 at all!!").is_err());
    }
}
