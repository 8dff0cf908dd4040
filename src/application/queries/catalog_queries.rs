//! Catalog Queries

/// 列出商品目录查询
///
/// token 可选，仅用于判定 premium 锁定状态
#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    pub token: Option<String>,
}
