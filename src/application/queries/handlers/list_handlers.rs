//! List Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ListStorePort, ProductCatalogPort};
use crate::application::queries::GetList;
use crate::application::session_service::SessionService;
use crate::domain::catalog::Product;

/// GetList Handler
///
/// 返回清单中且存在于目录的商品，按目录顺序（而非加入顺序）
pub struct GetListHandler {
    list_store: Arc<dyn ListStorePort>,
    catalog: Arc<dyn ProductCatalogPort>,
    sessions: Arc<SessionService>,
}

impl GetListHandler {
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

    pub async fn handle(&self, query: GetList) -> Result<Vec<Product>, ApplicationError> {
        let user = self.sessions.authenticate(query.token.as_deref())?;
        let list = self.list_store.get(user.id(), query.kind);

        Ok(self
            .catalog
            .products()
            .iter()
            .filter(|product| list.contains(product.id))
            .cloned()
            .collect())
    }
}
