//! Admin token verification.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks Bearer tokens on admin routes against the configured admin token.
///
/// Both sides are MACed with a key generated at start-up and compared with
/// [`Mac::verify_slice`], so the comparison runs in constant time.
pub struct AdminAuthService {
    key: [u8; 32],
    expected: Option<Vec<u8>>,
}

impl AdminAuthService {
    /// Creates the service. `None` disables admin access entirely.
    pub fn new(admin_token: Option<&str>) -> Self {
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);

        let expected = admin_token.map(|token| mac(&key, token).finalize().into_bytes().to_vec());

        Self { key, expected }
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// Verifies a presented token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no admin token is configured or
    /// the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let Some(expected) = &self.expected else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Admin access is disabled"}),
            ));
        };

        mac(&self.key, token).verify_slice(expected).map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid admin token"}))
        })
    }
}

fn mac(key: &[u8; 32], token: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key)
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(token.as_bytes());
    mac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        let service = AdminAuthService::new(Some("correct-horse-battery"));

        assert!(service.is_enabled());
        assert!(service.authenticate("correct-horse-battery").is_ok());
    }

    #[test]
    fn test_invalid_token() {
        let service = AdminAuthService::new(Some("correct-horse-battery"));

        let result = service.authenticate("wrong-horse-battery");

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_prefix_is_not_enough() {
        let service = AdminAuthService::new(Some("correct-horse-battery"));

        assert!(service.authenticate("correct-horse").is_err());
        assert!(service.authenticate("").is_err());
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let service = AdminAuthService::new(None);

        assert!(!service.is_enabled());
        assert!(matches!(
            service.authenticate("anything"),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_keys_differ_per_instance() {
        let a = AdminAuthService::new(Some("token-token-token"));
        let b = AdminAuthService::new(Some("token-token-token"));

        assert_ne!(a.key, b.key);
    }
}
