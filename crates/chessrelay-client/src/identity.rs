//! Participant identity generation.
//!
//! Each client process generates one identity token at startup and
//! keeps it for its whole lifetime. The token's only consumer is echo
//! suppression — when a relayed `move` comes back carrying our own
//! token, we know not to apply it a second time. It is *not* an
//! authentication credential (a stated non-goal), so uniqueness with
//! overwhelming probability is sufficient and no registry is kept.

use chessrelay_protocol::PlayerId;
use rand::Rng;

/// Generates a fresh participant identity: 32 lowercase hex characters
/// (128 bits of randomness). Never fails.
///
/// With two participants per room, a collision would require two
/// clients drawing the same 128-bit value — negligible for any
/// session's lifetime.
pub fn generate() -> PlayerId {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    let token: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    PlayerId::new(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_32_hex_chars() {
        let id = generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_produces_distinct_tokens() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
    }
}
