//! Binary parsing of the two TLV-like payloads the U2F wire protocol sends.
//!
//! See the FIDO U2F raw message formats specification for the authoritative layout; the
//! shapes parsed here are documented in full in `SPEC_FULL.md` §4.4.

use crate::error::Error;

/// The minimum length of a registration-data blob: reserved byte + 65 byte public key + 1
/// byte key-handle length + the shortest plausible DER certificate/signature pair.
const MIN_REGISTRATION_DATA_LEN: usize = 1 + 65 + 1 + 71;

/// The pieces extracted from a parsed `registrationData` blob. All slices borrow directly
/// from the decoded buffer the caller owns.
pub struct RegistrationData<'a> {
    pub user_public_key: &'a [u8],
    pub key_handle: &'a [u8],
    pub attestation_cert: &'a [u8],
    pub signature: &'a [u8],
}

/// Parse a decoded `registrationData` payload per §4.4.1.
pub fn parse_registration_data(data: &[u8]) -> Result<RegistrationData<'_>, Error> {
    if data.len() <= MIN_REGISTRATION_DATA_LEN {
        return Err(Error::Format("registration data too short".into()));
    }

    if data[0] != 0x05 {
        return Err(Error::Format(format!(
            "invalid registration data, reserved byte is 0x{:02x}, expected 0x05",
            data[0]
        )));
    }

    let user_public_key = &data[1..66];

    let key_handle_len = usize::from(data[66]);
    let rest = &data[67..];

    if rest.len() <= key_handle_len + 71 {
        return Err(Error::Format("registration data too short for key handle".into()));
    }

    let key_handle = &rest[..key_handle_len];
    let rest = &rest[key_handle_len..];

    if rest[0] != 0x30 {
        return Err(Error::Format(
            "attestation certificate does not start with a DER SEQUENCE tag".into(),
        ));
    }
    let cert_len = der_length(&rest[1..])? + 1; // plus the tag byte itself
    if cert_len > rest.len() {
        return Err(Error::Format("attestation certificate length exceeds buffer".into()));
    }
    let attestation_cert = &rest[..cert_len];
    let signature = &rest[cert_len..];

    Ok(RegistrationData {
        user_public_key,
        key_handle,
        attestation_cert,
        signature,
    })
}

/// The pieces extracted from a parsed `signatureData` blob. The signature slice borrows from
/// the decoded buffer the caller owns.
pub struct SignatureData<'a> {
    pub user_presence: u8,
    pub counter: [u8; 4],
    pub signature: &'a [u8],
}

/// Parse a decoded `signatureData` payload per §4.4.2.
pub fn parse_signature_data(data: &[u8]) -> Result<SignatureData<'_>, Error> {
    if data.len() <= 5 {
        return Err(Error::Format("signature data too short".into()));
    }

    let user_presence = data[0];
    if user_presence & 0x01 == 0 {
        return Err(Error::Format("user-presence bit is not set".into()));
    }

    let mut counter = [0u8; 4];
    counter.copy_from_slice(&data[1..5]);

    Ok(SignatureData {
        user_presence,
        counter,
        signature: &data[5..],
    })
}

/// Parse a DER length field (the minimal subset needed to skip over an embedded certificate).
///
/// Returns the length of the value *including* the bytes of the length field itself, so the
/// caller can add the one tag byte it already consumed to get the total TLV size.
fn der_length(data: &[u8]) -> Result<usize, Error> {
    let first = *data
        .first()
        .ok_or_else(|| Error::Format("truncated DER length".into()))?;

    if first == 0 {
        return Err(Error::Format("DER length is zero".into()));
    }

    if first < 0x80 {
        return Ok(usize::from(first) + 1);
    }

    let count = usize::from(first & 0x7f);
    if count == 0x7f {
        // X.690 8.1.3.5: the reserved value 0b1111_1111 is illegal.
        return Err(Error::Format("illegal DER length value".into()));
    }
    if count == 0 {
        // The "indefinite" BER form, not allowed in DER.
        return Err(Error::Format("indefinite DER length form is not allowed".into()));
    }
    if count > std::mem::size_of::<usize>() {
        return Err(Error::Format("unsupported DER length size".into()));
    }
    if count > data.len() - 1 {
        return Err(Error::Format("truncated DER length data".into()));
    }

    let mut len = 0usize;
    for &byte in &data[1..=count] {
        len = (len << 8) | usize::from(byte);
    }

    Ok(len + count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_registration_data() {
        let data = vec![0x05u8; 10];
        assert!(parse_registration_data(&data).is_err());
    }

    #[test]
    fn rejects_wrong_reserved_byte() {
        let mut data = vec![0u8; MIN_REGISTRATION_DATA_LEN + 5];
        data[0] = 0x04;
        assert!(parse_registration_data(&data).is_err());
    }

    #[test]
    fn rejects_short_signature_data() {
        assert!(parse_signature_data(&[1, 0, 0, 0]).is_err());
    }

    #[test]
    fn rejects_signature_data_without_presence_bit() {
        let data = [0u8, 0, 0, 0, 42, 1, 2, 3, 4, 5, 6];
        let err = parse_signature_data(&data).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn accepts_signature_data_with_presence_bit() {
        let data = [1u8, 0, 0, 0, 42, 0x30, 0x02, 0x01, 0x01];
        let parsed = parse_signature_data(&data).unwrap();
        assert_eq!(parsed.user_presence, 1);
        assert_eq!(parsed.counter, [0, 0, 0, 42]);
        assert_eq!(parsed.signature, &[0x30, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn der_length_short_form() {
        // tag consumed by caller; length byte 0x7f means 127, + 1 for the length byte itself.
        assert_eq!(der_length(&[0x7f]).unwrap(), 128);
    }

    #[test]
    fn der_length_long_form_two_byte() {
        // 0x82 => 2 length bytes follow; 0x01 0x00 => 256.
        assert_eq!(der_length(&[0x82, 0x01, 0x00]).unwrap(), 256 + 3);
    }

    #[test]
    fn der_length_rejects_indefinite_form() {
        assert!(der_length(&[0x80]).is_err());
    }
}
