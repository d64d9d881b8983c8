//! Token helpers

use rand::Rng;

use crate::constants::CONFIRMATION_CODE_LENGTH;

/// Generate a random alphanumeric token
pub fn generate_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a booking confirmation code
pub fn confirmation_code() -> String {
    generate_token(CONFIRMATION_CODE_LENGTH).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let token1 = generate_token(32);
        let token2 = generate_token(32);

        assert_eq!(token1.len(), 32);
        assert_eq!(token2.len(), 32);
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_confirmation_code() {
        let code = confirmation_code();
        assert_eq!(code.len(), CONFIRMATION_CODE_LENGTH);
        assert_eq!(code, code.to_uppercase());
    }
}
