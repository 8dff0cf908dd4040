//! List Commands - 心愿单 / 收藏夹增删

use crate::domain::catalog::ProductId;
use crate::domain::collection::ListKind;

/// 加入清单命令
#[derive(Debug, Clone)]
pub struct AddToListCommand {
    pub token: Option<String>,
    pub kind: ListKind,
    pub product_id: ProductId,
}

/// 移出清单命令
#[derive(Debug, Clone)]
pub struct RemoveFromListCommand {
    pub token: Option<String>,
    pub kind: ListKind,
    pub product_id: ProductId,
}

/// 清单变更响应
#[derive(Debug, Clone)]
pub struct ListChangeResponse {
    pub kind: ListKind,
    pub product_id: ProductId,
    /// 清单内容是否发生变化（重复加入 / 移除不存在项时为 false）
    pub changed: bool,
}
