//! Token Issuer Port - 会话令牌签发

/// 会话令牌签发器
///
/// 令牌是不透明字符串，调用方不解析其内容
pub trait TokenIssuerPort: Send + Sync {
    fn issue(&self) -> String;
}
