//! # Credential Hashing
//!
//! Unsalted, single-pass SHA-256 of a credential string, stored as 64
//! lowercase hex characters. There is no decode path.
//!
//! SHA-256 is compiled in, so hashing cannot fail at run time and never
//! yields an empty digest.

use sha2::{Digest, Sha256};
use std::fmt::Write;
use subtle::ConstantTimeEq;

/// Length of a raw digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Raw SHA-256 digest of `secret`'s UTF-8 bytes.
pub fn digest(secret: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex of [`digest`], each byte zero-padded to two characters.
pub fn hex_digest(secret: &str) -> String {
    digest(secret)
        .iter()
        .fold(String::with_capacity(DIGEST_LEN * 2), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}

/// Checks `secret` against a stored hex digest in constant time.
///
/// Comparison is case-sensitive: stored digests are always lowercase.
pub fn verify(secret: &str, stored_hex: &str) -> bool {
    hex_digest(secret)
        .as_bytes()
        .ct_eq(stored_hex.as_bytes())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::SmallRng};
    use std::collections::HashSet;

    #[test]
    fn test_hex_digest_known_vectors() {
        assert_eq!(
            hex_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_hex_digest_is_deterministic_lowercase_64() {
        let a = hex_digest("password");
        let b = hex_digest("password");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_matches_hex() {
        let raw = digest("Secret1");
        assert_eq!(raw.len(), DIGEST_LEN);
        let hex: String = raw.iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(hex, hex_digest("Secret1"));
    }

    #[test]
    fn test_distinct_inputs_never_collide() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut inputs = HashSet::new();
        while inputs.len() < 500 {
            let len = rng.random_range(0..24);
            let s: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            inputs.insert(s);
        }

        let digests: HashSet<String> = inputs.iter().map(|s| hex_digest(s)).collect();
        assert_eq!(digests.len(), inputs.len());
        assert!(digests.iter().all(|d| d.len() == 64));
    }

    #[test]
    fn test_verify() {
        let stored = hex_digest("Secret1");
        assert!(verify("Secret1", &stored));
        assert!(!verify("secret1", &stored));
        assert!(!verify("Secret1", &stored.to_uppercase()));
        assert!(!verify("Secret1", ""));
    }
}
