//! Data Transfer Objects
//!
//! 字段名与对外 JSON 保持一致

use serde::{Deserialize, Serialize};

use crate::application::{CatalogItem, UserProfile};
use crate::domain::catalog::{Product, ProductId};

// ============================================================================
// 通用
// ============================================================================

/// token 查询参数（`?token=...`）
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// 仅含提示信息的成功响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 公开用户信息
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub is_premium: bool,
}

impl From<UserProfile> for UserDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            is_premium: profile.is_premium,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponseDto {
    pub ok: bool,
    pub token: String,
    pub user: UserDto,
}

// ============================================================================
// Catalog DTOs
// ============================================================================

/// 目录条目：商品全部字段 + locked
#[derive(Debug, Serialize)]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,
    pub locked: bool,
}

impl From<CatalogItem> for ProductDto {
    fn from(item: CatalogItem) -> Self {
        Self {
            product: item.product,
            locked: item.locked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
}

// ============================================================================
// List DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListActionRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Product>,
}
