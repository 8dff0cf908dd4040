//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，
//! 所有可变数据都由端口实现持有，不存在进程级全局变量

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddToListHandler, LoginHandler, RegisterHandler, RemoveFromListHandler, UpgradeHandler,
    // Query handlers
    GetListHandler, ListProductsHandler,
    // Ports
    ListStorePort, PasswordHasherPort, ProductCatalogPort, SessionManagerPort, SessionService,
    TokenIssuerPort, UserRepositoryPort,
    // Session
    SessionPolicy,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub list_store: Arc<dyn ListStorePort>,
    pub catalog: Arc<dyn ProductCatalogPort>,
    pub sessions: Arc<SessionService>,

    // ========== Command Handlers ==========
    pub register_handler: RegisterHandler,
    pub login_handler: LoginHandler,
    pub upgrade_handler: UpgradeHandler,
    pub add_to_list_handler: AddToListHandler,
    pub remove_from_list_handler: RemoveFromListHandler,

    // ========== Query Handlers ==========
    pub list_products_handler: ListProductsHandler,
    pub get_list_handler: GetListHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        session_manager: Arc<dyn SessionManagerPort>,
        list_store: Arc<dyn ListStorePort>,
        catalog: Arc<dyn ProductCatalogPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
        session_policy: SessionPolicy,
    ) -> Self {
        let sessions = Arc::new(SessionService::new(
            session_manager.clone(),
            token_issuer,
            user_repo.clone(),
            session_policy,
        ));

        Self {
            // Ports
            user_repo: user_repo.clone(),
            session_manager: session_manager.clone(),
            list_store: list_store.clone(),
            catalog: catalog.clone(),
            sessions: sessions.clone(),

            // Command handlers
            register_handler: RegisterHandler::new(
                user_repo.clone(),
                list_store.clone(),
                password_hasher.clone(),
                sessions.clone(),
            ),
            login_handler: LoginHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
                sessions.clone(),
            ),
            upgrade_handler: UpgradeHandler::new(user_repo.clone(), sessions.clone()),
            add_to_list_handler: AddToListHandler::new(
                list_store.clone(),
                catalog.clone(),
                sessions.clone(),
            ),
            remove_from_list_handler: RemoveFromListHandler::new(
                list_store.clone(),
                sessions.clone(),
            ),

            // Query handlers
            list_products_handler: ListProductsHandler::new(catalog.clone(), sessions.clone()),
            get_list_handler: GetListHandler::new(list_store, catalog, sessions),
        }
    }
}
