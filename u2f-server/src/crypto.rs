//! The cryptographic primitives this protocol needs: SHA-256, raw EC point decoding, X.509
//! attestation-key extraction, and ECDSA signature verification, all backed by `openssl`.

use openssl::bn::BigNumContext;
use openssl::ec::{EcGroup, EcKey, EcPoint};
use openssl::ecdsa::EcdsaSig;
use openssl::nid::Nid;
use openssl::pkey::Public;
use openssl::sha;
use openssl::x509::X509;

use crate::error::Error;
use crate::PUBLIC_KEY_RAW_LEN;

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    sha::sha256(data)
}

/// Decode a raw 65-byte uncompressed EC point (`0x04 || X || Y`) on the P-256 curve into an
/// openssl public key, rejecting anything that is not actually on the curve.
pub fn decode_user_key(raw: &[u8]) -> Result<EcKey<Public>, Error> {
    if raw.len() != PUBLIC_KEY_RAW_LEN {
        return Err(Error::Format(format!(
            "invalid public key length {}, expected {}",
            raw.len(),
            PUBLIC_KEY_RAW_LEN
        )));
    }

    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1)?;
    let mut ctx = BigNumContext::new()?;
    let point = EcPoint::from_bytes(&group, raw, &mut ctx)
        .map_err(|_| Error::Format("public key is not a valid point on P-256".into()))?;

    let key = EcKey::from_public_key(&group, &point)?;
    key.check_key()?;

    Ok(key)
}

/// Parse a DER-encoded X.509 attestation certificate and extract its EC public key, which is
/// the key the registration signature is verified under.
pub fn attestation_key(cert_der: &[u8]) -> Result<(X509, EcKey<Public>), Error> {
    let cert = X509::from_der(cert_der)?;
    let key = cert.public_key()?.ec_key()?;
    Ok((cert, key))
}

/// Export a certificate to PEM text.
pub fn cert_to_pem(cert: &X509) -> Result<String, Error> {
    let pem = cert.to_pem()?;
    String::from_utf8(pem)
        .map_err(|_| Error::Format("attestation certificate PEM was not valid UTF-8".into()))
}

/// Decode a DER-encoded ECDSA signature and verify it over `digest` using `key`.
///
/// Returns `Ok(())` on a valid signature, `Err(Error::SignatureRejected)` if the signature
/// decodes but does not verify, and `Err(Error::Crypto(_))` / `Err(Error::Format(_))` if the
/// DER encoding itself is malformed.
pub fn verify(key: &EcKey<Public>, digest: &[u8], signature_der: &[u8]) -> Result<(), Error> {
    let signature = EcdsaSig::from_der(signature_der)
        .map_err(|err| Error::Format(format!("invalid ECDSA signature encoding: {}", err)))?;

    match signature.verify(digest, key) {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::SignatureRejected),
        Err(err) => Err(Error::Crypto(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_matches_known_vector() {
        // sha256("") from FIPS 180-4 test vectors.
        let digest = sha256(b"");
        assert_eq!(
            hex(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn decode_user_key_rejects_wrong_length() {
        assert!(decode_user_key(&[0u8; 10]).is_err());
    }

    fn hex(data: &[u8]) -> String {
        data.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
