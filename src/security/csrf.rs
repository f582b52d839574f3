//! CSRF tokens for rendered forms.
//!
//! Tokens are 32 random bytes, hex encoded, minted per render. The server keeps
//! no token state; a submission is only checked for a well-formed token.

use rand::RngCore;

/// Raw token size in bytes.
pub const TOKEN_BYTES: usize = 32;

/// Mint a fresh token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// True if `token` has the shape of a minted token.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_BYTES * 2 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_hex_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(is_well_formed(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("abc123"));
        assert!(!is_well_formed(&"z".repeat(64)));
        assert!(!is_well_formed(&"a".repeat(65)));
    }
}
