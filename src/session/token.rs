//! Session Tokens

use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Length in characters of a generated token
pub const TOKEN_LEN: usize = 32;

/// Generate a fixed-length opaque session token
///
/// Prefers the OS randomness source; when that is unavailable, falls
/// back to mixing a high-resolution timestamp through a hasher.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_LEN / 2];
    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        warn!("OS randomness unavailable ({}), using fallback source", e);
        fallback_fill(&mut bytes);
    }
    hex::encode(bytes)
}

/// Derive token bytes from a timestamp and iterated hasher mixing
fn fallback_fill(bytes: &mut [u8]) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let mut state = nanos as u64 ^ u64::from(std::process::id());
    for chunk in bytes.chunks_mut(8) {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        nanos.hash(&mut hasher);
        state = hasher.finish();
        for (b, w) in chunk.iter_mut().zip(state.to_le_bytes().iter()) {
            *b = *w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_fixed_length_hex() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_differ_between_calls() {
        assert_ne!(generate(), generate());
    }

    #[test]
    fn test_fallback_output_varies_over_time() {
        let mut a = [0u8; TOKEN_LEN / 2];
        let mut b = [0u8; TOKEN_LEN / 2];
        fallback_fill(&mut a);
        std::thread::sleep(std::time::Duration::from_millis(2));
        fallback_fill(&mut b);
        assert_ne!(a, b);
        assert!(a.iter().any(|&byte| byte != 0));
    }
}
