use crate::error::CredentialError;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A decoded private key and the address it controls. The raw key material
/// lives inside the signer and is never logged or persisted.
pub struct SigningIdentity {
    pub signer: PrivateKeySigner,
    pub address: Address,
}

/// Decodes a URL-safe base64 private key into a signing identity.
///
/// Keys arrive base64url encoded (`-`/`_` alphabet, padding optional). Input
/// containing `+` or `/` is standard base64 supplied by mistake and is
/// rejected outright rather than silently reinterpreted.
pub fn decode_key(encoded: &str) -> Result<SigningIdentity, CredentialError> {
    if encoded.contains(['+', '/']) {
        return Err(CredentialError::InvalidEncoding);
    }

    let mut key = encoded.trim().replace('-', "+").replace('_', "/");
    while key.len() % 4 != 0 {
        key.push('=');
    }

    let bytes = STANDARD.decode(&key)?;
    let signer = PrivateKeySigner::from_slice(&bytes)
        .map_err(|e| CredentialError::InvalidKey(e.to_string()))?;
    let address = signer.address();

    Ok(SigningIdentity { signer, address })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    // secp256k1 private key 0x...01, a well-known test vector.
    const KEY_ONE_B64URL: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE";

    #[test]
    fn decodes_unpadded_base64url_key() {
        let identity = decode_key(KEY_ONE_B64URL).unwrap();
        assert_eq!(
            identity.address,
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let padded = format!("  {KEY_ONE_B64URL}\n");
        let identity = decode_key(&padded).unwrap();
        assert_eq!(
            identity.address,
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn rejects_standard_base64_alphabet() {
        for input in ["ab+cd", "ab/cd"] {
            assert!(matches!(
                decode_key(input),
                Err(CredentialError::InvalidEncoding)
            ));
        }
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(matches!(
            decode_key("not base64!!"),
            Err(CredentialError::Decode(_))
        ));
    }

    #[test]
    fn rejects_wrong_length_key() {
        let short = URL_SAFE_NO_PAD.encode([1u8; 16]);
        assert!(matches!(
            decode_key(&short),
            Err(CredentialError::InvalidKey(_))
        ));
    }

    #[test]
    fn rejects_key_out_of_curve_range() {
        let oversized = URL_SAFE_NO_PAD.encode([0xffu8; 32]);
        assert!(matches!(
            decode_key(&oversized),
            Err(CredentialError::InvalidKey(_))
        ));
    }

    #[test]
    fn round_trips_arbitrary_key_bytes() {
        let raw: Vec<u8> = (1..=32).collect();
        let encoded = URL_SAFE_NO_PAD.encode(&raw);
        let identity = decode_key(&encoded).unwrap();
        assert_eq!(identity.signer.to_bytes().as_slice(), raw.as_slice());
    }
}
