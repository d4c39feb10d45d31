/// Password Hashing and Verification
///
/// One-way credential hashing with bcrypt. Input policy (length limits
/// and the like) lives in the validators module; this layer hashes
/// whatever plaintext it is handed, including the empty string.

use bcrypt::{hash, verify};

use crate::error::AppError;

/// Hash a password using bcrypt
///
/// Salted per call, so hashing the same plaintext twice yields two
/// different strings that both verify against it. `cost` is the
/// process-wide work factor from `AuthSettings`.
///
/// # Errors
/// Returns an error only if bcrypt itself rejects the parameters.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its stored hash
///
/// Returns true iff `password` is the plaintext that produced `hash`.
/// bcrypt performs a constant-time digest comparison internally, so the
/// running time does not depend on where a mismatch occurs.
///
/// A malformed or corrupted stored hash yields `false` rather than an
/// error: from the caller's perspective it must present exactly like a
/// wrong password, never a crash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4; // minimum cost, keeps the suite fast

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("correct-horse", TEST_COST).expect("Failed to hash password");

        assert_ne!(hash, "correct-horse");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("correct-horse", &hash));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("correct-horse", TEST_COST).expect("Failed to hash password");

        assert!(!verify_password("wrong-pw", &hash));
    }

    #[test]
    fn same_plaintext_hashes_differently_but_both_verify() {
        let first = hash_password("hunter2hunter2", TEST_COST).expect("Failed to hash password");
        let second = hash_password("hunter2hunter2", TEST_COST).expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(verify_password("hunter2hunter2", &first));
        assert!(verify_password("hunter2hunter2", &second));
    }

    #[test]
    fn empty_password_still_hashes_and_verifies() {
        let hash = hash_password("", TEST_COST).expect("Failed to hash password");

        assert!(verify_password("", &hash));
        assert!(!verify_password("not-empty", &hash));
    }

    #[test]
    fn malformed_stored_hash_presents_as_wrong_password() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "$2b$corrupted"));
    }
}
