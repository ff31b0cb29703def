//! Argon2id implementation of the `CredentialHasher` port.
//!
//! Stored credentials are PHC strings, so the algorithm, version, cost
//! parameters and salt travel with the digest. Verification reads the
//! parameters from the stored value, which keeps old credentials valid after
//! the configured costs change.

use argon2::password_hash::{PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::domain::ports::{CredentialHashError, CredentialHasher};
use crate::domain::{Password, PasswordHash};

const SALT_LEN: usize = 16;

/// Argon2id hasher with tunable work factor.
///
/// # Examples
/// ```
/// use signup::domain::ports::CredentialHasher;
/// use signup::domain::Password;
/// use signup::outbound::hashing::Argon2CredentialHasher;
///
/// let hasher = Argon2CredentialHasher::with_costs(8, 1, 1).expect("valid costs");
/// let password = Password::new("secret").expect("non-empty");
/// let stored = hasher.hash(&password).expect("hash");
/// assert!(hasher.verify(&stored, "secret"));
/// ```
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2CredentialHasher {
    /// Build a hasher from memory cost (KiB), iteration count and lanes.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHashError::Derivation`] when argon2 rejects the
    /// parameter combination.
    pub fn with_costs(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, CredentialHashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|err| CredentialHashError::derivation(err.to_string()))?;
        Ok(Self { params })
    }

    fn engine(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

fn fresh_salt() -> Result<SaltString, CredentialHashError> {
    let mut bytes = [0_u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| CredentialHashError::entropy(err.to_string()))?;
    SaltString::encode_b64(&bytes).map_err(|err| CredentialHashError::derivation(err.to_string()))
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialHashError> {
        let salt = fresh_salt()?;
        let encoded = self
            .engine()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| CredentialHashError::derivation(err.to_string()))?;
        Ok(PasswordHash::from_phc(encoded.to_string()))
    }

    fn verify(&self, stored: &PasswordHash, candidate: &str) -> bool {
        let Ok(parsed) = argon2::PasswordHash::new(stored.as_phc()) else {
            return false;
        };
        self.engine()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    //! Hashing runs at minimum Argon2 cost to keep the suite fast.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2CredentialHasher {
        Argon2CredentialHasher::with_costs(8, 1, 1).expect("valid test costs")
    }

    fn password(raw: &str) -> Password {
        Password::new(raw).expect("non-empty password")
    }

    #[rstest]
    fn hashing_is_salted_and_non_deterministic(hasher: Argon2CredentialHasher) {
        let first = hasher.hash(&password("secret")).expect("first hash");
        let second = hasher.hash(&password("secret")).expect("second hash");

        assert_ne!(first, second);
        assert!(hasher.verify(&first, "secret"));
        assert!(hasher.verify(&second, "secret"));
    }

    #[rstest]
    fn stored_value_never_contains_plaintext(hasher: Argon2CredentialHasher) {
        let stored = hasher.hash(&password("plain-text-secret")).expect("hash");
        assert!(stored.as_phc().starts_with("$argon2id$"));
        assert!(!stored.as_phc().contains("plain-text-secret"));
    }

    #[rstest]
    #[case("Secret")]
    #[case("secret ")]
    #[case("")]
    fn wrong_candidates_are_rejected(hasher: Argon2CredentialHasher, #[case] candidate: &str) {
        let stored = hasher.hash(&password("secret")).expect("hash");
        assert!(!hasher.verify(&stored, candidate));
    }

    #[rstest]
    #[case("")]
    #[case("not a phc string")]
    #[case("$argon2id$v=19$m=8,t=1,p=1$$")]
    fn malformed_stored_values_never_verify(
        hasher: Argon2CredentialHasher,
        #[case] stored: &str,
    ) {
        assert!(!hasher.verify(&PasswordHash::from_phc(stored), "secret"));
    }

    #[rstest]
    fn verification_uses_parameters_from_the_stored_value(hasher: Argon2CredentialHasher) {
        let stored = hasher.hash(&password("secret")).expect("hash");
        let stronger = Argon2CredentialHasher::with_costs(16, 2, 1).expect("valid costs");
        assert!(stronger.verify(&stored, "secret"));
    }

    #[rstest]
    fn invalid_costs_are_rejected() {
        let err = Argon2CredentialHasher::with_costs(1, 0, 0).expect_err("invalid costs");
        assert!(matches!(err, CredentialHashError::Derivation { .. }));
    }
}
