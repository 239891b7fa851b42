use rand::Rng;

/// Mint a fresh session token: 16 random bytes, hex-encoded.
pub fn mint_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    hex::encode(bytes)
}

/// Compare a presented token against the active one in constant time so
/// response timing does not leak how much of a guess matched.
pub fn verify_token(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_token_shape() {
        let token = mint_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_mint_token_unique() {
        assert_ne!(mint_token(), mint_token());
    }

    #[test]
    fn test_verify_token_valid() {
        assert!(verify_token("abc123", "abc123"));
    }

    #[test]
    fn test_verify_token_invalid() {
        assert!(!verify_token("abc124", "abc123"));
    }

    #[test]
    fn test_verify_token_different_length() {
        assert!(!verify_token("abc", "abc123"));
    }

    #[test]
    fn test_verify_token_empty() {
        assert!(verify_token("", ""));
    }
}
