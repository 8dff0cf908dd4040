//! Catalog Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListProducts;
use crate::infrastructure::http::dto::{ProductDto, ProductsResponse, TokenQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiQuery;
use crate::infrastructure::http::state::AppState;

/// 商品目录，token 可选
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let items = state
        .list_products_handler
        .handle(ListProducts { token: query.token })
        .await?;

    Ok(Json(ProductsResponse {
        products: items.into_iter().map(ProductDto::from).collect(),
    }))
}
