//! Password Policy
//!
//! The demo stores passwords verbatim; the salted scheme is an opt-in
//! hardening for deployments that want it. Verification is format-driven
//! so records written under either scheme keep verifying after the
//! policy changes.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const HASH_PREFIX: &str = "sha256$";

/// How passwords are stored and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Verbatim storage and comparison
    Plain,
    /// Salted SHA-256 digest, stored as `sha256$<salt>$<digest>`
    SaltedSha256,
}

/// Encode a password for storage under the given scheme
pub fn protect(scheme: PasswordScheme, password: &str) -> String {
    match scheme {
        PasswordScheme::Plain => password.to_string(),
        PasswordScheme::SaltedSha256 => {
            let mut salt = [0u8; 8];
            OsRng.fill_bytes(&mut salt);
            let salt = hex::encode(salt);
            let digest = salted_digest(&salt, password);
            format!("{}{}${}", HASH_PREFIX, salt, digest)
        }
    }
}

/// Compare a submitted password against a stored credential
pub fn verify(stored: &str, password: &str) -> bool {
    match stored.strip_prefix(HASH_PREFIX) {
        Some(rest) => match rest.split_once('$') {
            Some((salt, digest)) => salted_digest(salt, password) == digest,
            None => false,
        },
        None => stored == password,
    }
}

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scheme_stores_verbatim() {
        let stored = protect(PasswordScheme::Plain, "longpass1");
        assert_eq!(stored, "longpass1");
        assert!(verify(&stored, "longpass1"));
        assert!(!verify(&stored, "longpass2"));
    }

    #[test]
    fn test_salted_scheme_round_trip() {
        let stored = protect(PasswordScheme::SaltedSha256, "longpass1");
        assert!(stored.starts_with(HASH_PREFIX));
        assert_ne!(stored, "longpass1");
        assert!(verify(&stored, "longpass1"));
        assert!(!verify(&stored, "longpass2"));
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let first = protect(PasswordScheme::SaltedSha256, "longpass1");
        let second = protect(PasswordScheme::SaltedSha256, "longpass1");
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hashed_record_never_verifies() {
        assert!(!verify("sha256$missing-digest", "anything"));
    }
}
