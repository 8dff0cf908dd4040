//! List Queries

use crate::domain::collection::ListKind;

/// 获取用户清单查询
#[derive(Debug, Clone)]
pub struct GetList {
    pub token: Option<String>,
    pub kind: ListKind,
}
