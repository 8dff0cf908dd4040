//! Wishlist - 电商心愿单与收藏夹后端
//!
//! - Domain: account/, catalog/, collection/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker, adapters

use std::sync::Arc;

use wishlist::application::SessionPolicy;
use wishlist::config::{load_config, print_config};
use wishlist::infrastructure::adapters::{Argon2PasswordHasher, RandomTokenIssuer, StaticCatalog};
use wishlist::infrastructure::http::{AppState, HttpServer};
use wishlist::infrastructure::memory::{
    InMemoryListStore, InMemorySessionManager, InMemoryUserRepository,
};
use wishlist::infrastructure::seed::seed_demo_account;
use wishlist::infrastructure::worker::{SessionSweeper, SessionSweeperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},wishlist={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Wishlist - 心愿单与收藏夹后端");
    print_config(&config);

    // 创建内存存储
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let session_manager = Arc::new(InMemorySessionManager::new());
    let list_store = Arc::new(InMemoryListStore::new());

    // 创建适配器
    let catalog = Arc::new(StaticCatalog::seeded());
    let password_hasher = Arc::new(Argon2PasswordHasher::new());
    let token_issuer = Arc::new(RandomTokenIssuer::new());

    if config.seed.demo_account {
        seed_demo_account(
            user_repo.as_ref(),
            list_store.as_ref(),
            password_hasher.as_ref(),
        )?;
    }

    // 会话过期清理
    let session_policy = SessionPolicy {
        idle_timeout_secs: config.session.expire_secs,
    };
    if config.session.expires() {
        let sweeper = SessionSweeper::new(
            SessionSweeperConfig {
                idle_timeout_secs: config.session.expire_secs,
                interval_secs: config.session.sweep_interval_secs,
            },
            session_manager.clone(),
        );
        tokio::spawn(sweeper.run());
    }

    // 创建 HTTP 服务器
    let state = AppState::new(
        user_repo,
        session_manager,
        list_store,
        catalog,
        password_hasher,
        token_issuer,
        session_policy,
    );

    let server = HttpServer::new(config.server.clone(), state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
