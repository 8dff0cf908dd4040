//! List Command Handlers - 心愿单 / 收藏夹增删

use std::sync::Arc;

use crate::application::commands::{AddToListCommand, ListChangeResponse, RemoveFromListCommand};
use crate::application::error::ApplicationError;
use crate::application::ports::{ListStorePort, ProductCatalogPort};
use crate::application::session_service::SessionService;

/// AddToList Handler
///
/// 幂等：已存在的商品不会重复加入。
/// 不校验商品是否存在于目录，也不校验 premium 锁定状态
pub struct AddToListHandler {
    list_store: Arc<dyn ListStorePort>,
    catalog: Arc<dyn ProductCatalogPort>,
    sessions: Arc<SessionService>,
}

impl AddToListHandler {
    pub fn new(
        list_store: Arc<dyn ListStorePort>,
        catalog: Arc<dyn ProductCatalogPort>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            list_store,
            catalog,
            sessions,
        }
    }

    pub async fn handle(
        &self,
        cmd: AddToListCommand,
    ) -> Result<ListChangeResponse, ApplicationError> {
        let user = self.sessions.authenticate(cmd.token.as_deref())?;

        if self.catalog.find(cmd.product_id).is_none() {
            tracing::debug!(
                user_id = %user.id(),
                product_id = %cmd.product_id,
                "Product not in catalog, storing id anyway"
            );
        }

        let changed = self.list_store.add(user.id(), cmd.kind, cmd.product_id);

        tracing::info!(
            user_id = %user.id(),
            list = %cmd.kind,
            product_id = %cmd.product_id,
            changed,
            "List item added"
        );

        Ok(ListChangeResponse {
            kind: cmd.kind,
            product_id: cmd.product_id,
            changed,
        })
    }
}

/// RemoveFromList Handler
///
/// 幂等：移除不存在的商品为 no-op
pub struct RemoveFromListHandler {
    list_store: Arc<dyn ListStorePort>,
    sessions: Arc<SessionService>,
}

impl RemoveFromListHandler {
    pub fn new(list_store: Arc<dyn ListStorePort>, sessions: Arc<SessionService>) -> Self {
        Self {
            list_store,
            sessions,
        }
    }

    pub async fn handle(
        &self,
        cmd: RemoveFromListCommand,
    ) -> Result<ListChangeResponse, ApplicationError> {
        let user = self.sessions.authenticate(cmd.token.as_deref())?;

        let changed = self.list_store.remove(user.id(), cmd.kind, cmd.product_id);

        tracing::info!(
            user_id = %user.id(),
            list = %cmd.kind,
            product_id = %cmd.product_id,
            changed,
            "List item removed"
        );

        Ok(ListChangeResponse {
            kind: cmd.kind,
            product_id: cmd.product_id,
            changed,
        })
    }
}
