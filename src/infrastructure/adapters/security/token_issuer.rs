//! Random Token Issuer

use rand::rngs::OsRng;
use rand::RngCore;

use crate::application::ports::TokenIssuerPort;

/// 令牌字节数（hex 编码后长度翻倍）
const TOKEN_BYTES: usize = 32;

/// 随机会话令牌签发器
///
/// 32 字节系统随机数，hex 编码为 64 个小写十六进制字符
pub struct RandomTokenIssuer;

impl RandomTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuerPort for RandomTokenIssuer {
    fn issue(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let token = RandomTokenIssuer::new().issue();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let issuer = RandomTokenIssuer::new();
        assert_ne!(issuer.issue(), issuer.issue());
    }
}
