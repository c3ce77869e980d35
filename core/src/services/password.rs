//! Password hashing with bcrypt.

use crate::errors::{DomainError, DomainResult};

/// One-way adaptive password hasher.
///
/// Wraps bcrypt with a configurable cost factor. Hashing is intentionally
/// slow; callers should expect each call to take a noticeable fraction of a
/// second at the default cost.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hasher with an explicit cost. Tests use a low cost to stay
    /// fast; production uses the default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password.
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {e}"),
        })
    }

    /// Verifies a plaintext password against a stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {e}"),
        })
    }
}
