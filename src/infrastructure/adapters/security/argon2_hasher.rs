//! Argon2 Password Hasher
//!
//! 使用 Argon2id 默认参数，输出 PHC 格式字符串
//! （如 `$argon2id$v=19$m=19456,t=2,p=1$...`），每次哈希使用随机盐

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::application::ports::{HashError, PasswordHasherPort};
use crate::domain::account::PasswordHash;

/// Argon2id 密码哈希器
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// 低成本参数，仅用于测试
    #[cfg(test)]
    pub fn fast_for_tests() -> Self {
        let params = argon2::Params::new(8, 1, 1, None).expect("valid argon2 params");
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError::Hash(e.to_string()))?;
        Ok(PasswordHash::new(hash.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, HashError> {
        let parsed = PhcHash::new(hash.as_str()).map_err(|e| HashError::Malformed(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::fast_for_tests();
        let hash = hasher.hash("test123").unwrap();
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify("test123", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = Argon2PasswordHasher::fast_for_tests();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = Argon2PasswordHasher::fast_for_tests();
        let err = hasher.verify("pw", &PasswordHash::new("not-a-phc-string"));
        assert!(matches!(err, Err(HashError::Malformed(_))));
    }
}
