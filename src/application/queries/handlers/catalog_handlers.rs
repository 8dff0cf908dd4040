//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ProductCatalogPort;
use crate::application::queries::ListProducts;
use crate::application::session_service::SessionService;
use crate::domain::catalog::Product;

// ============================================================================
// Response DTOs
// ============================================================================

/// 带锁定标记的目录条目
///
/// 锁定的商品仍返回全部字段
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub product: Product,
    pub locked: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListProducts Handler
pub struct ListProductsHandler {
    catalog: Arc<dyn ProductCatalogPort>,
    sessions: Arc<SessionService>,
}

impl ListProductsHandler {
    pub fn new(catalog: Arc<dyn ProductCatalogPort>, sessions: Arc<SessionService>) -> Self {
        Self { catalog, sessions }
    }

    pub async fn handle(&self, query: ListProducts) -> Result<Vec<CatalogItem>, ApplicationError> {
        let is_premium = self
            .sessions
            .viewer(query.token.as_deref())
            .map(|user| user.is_premium())
            .unwrap_or(false);

        Ok(self
            .catalog
            .products()
            .iter()
            .map(|product| CatalogItem {
                locked: product.is_locked_for(is_premium),
                product: product.clone(),
            })
            .collect())
    }
}
