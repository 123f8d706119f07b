use data_encoding::HEXLOWER_PERMISSIVE;
use ring::hmac;

/// Check a `sha1=<hex-digest>` signature header against the request body.
///
/// A missing or malformed header, an algorithm other than sha1, or a
/// non-hex digest all fail closed. The digest comparison itself goes
/// through `ring::hmac::verify`, which is constant-time.
pub fn hmac_sha1_verify(key_bytes: &[u8], payload: &[u8], signature_header: Option<&str>) -> bool {
    let Some(header) = signature_header else {
        return false;
    };
    let parts: Vec<&str> = header.split('=').collect();
    let &[algorithm, digest] = parts.as_slice() else {
        return false;
    };
    if algorithm != "sha1" {
        return false;
    }
    let Ok(digest_decoded) = HEXLOWER_PERMISSIVE.decode(digest.as_bytes()) else {
        return false;
    };
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key_bytes);
    hmac::verify(&key, payload, digest_decoded.as_slice()).is_ok()
}

#[cfg(test)]
mod tests {
    use data_encoding::HEXLOWER;
    use ring::hmac;

    use super::*;

    fn sign_header(secret: &[u8], payload: &[u8]) -> String {
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, secret);
        let tag = hmac::sign(&key, payload);
        format!("sha1={}", HEXLOWER.encode(tag.as_ref()))
    }

    #[test]
    fn matching_signature_verifies() {
        let header = sign_header(b"s3cret", br#"{"hook_id": 42}"#);
        assert!(hmac_sha1_verify(
            b"s3cret",
            br#"{"hook_id": 42}"#,
            Some(&header)
        ));
    }

    #[test]
    fn every_single_byte_mutation_fails() {
        let payload = b"payload-v1".to_vec();
        let header = sign_header(b"s3cret", &payload);
        for i in 0..payload.len() {
            let mut mutated = payload.clone();
            mutated[i] ^= 0x01;
            assert!(!hmac_sha1_verify(b"s3cret", &mutated, Some(&header)));
        }
    }

    #[test]
    fn wrong_secret_fails() {
        let header = sign_header(b"s3cret", b"payload");
        assert!(!hmac_sha1_verify(b"other", b"payload", Some(&header)));
    }

    #[test]
    fn missing_header_fails() {
        assert!(!hmac_sha1_verify(b"s3cret", b"payload", None));
    }

    #[test]
    fn header_without_separator_fails() {
        assert!(!hmac_sha1_verify(b"s3cret", b"payload", Some("sha1deadbeef")));
    }

    #[test]
    fn header_with_extra_separator_fails() {
        assert!(!hmac_sha1_verify(b"s3cret", b"payload", Some("sha1=dead=beef")));
    }

    #[test]
    fn other_algorithms_are_rejected() {
        let digest = sign_header(b"s3cret", b"payload").split_off("sha1=".len());
        assert!(!hmac_sha1_verify(
            b"s3cret",
            b"payload",
            Some(&format!("sha256={digest}"))
        ));
    }

    #[test]
    fn non_hex_digest_fails() {
        assert!(!hmac_sha1_verify(b"s3cret", b"payload", Some("sha1=zzzz")));
    }

    #[test]
    fn empty_body_round_trips() {
        let header = sign_header(b"s3cret", b"");
        assert!(hmac_sha1_verify(b"s3cret", b"", Some(&header)));
    }
}
