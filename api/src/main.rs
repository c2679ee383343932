use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use bl_api::app::create_app;
use bl_api::routes::AppState;
use bl_core::services::auth::{AuthService, AuthServiceConfig};
use bl_core::services::meal::MealService;
use bl_core::services::member::MemberService;
use bl_core::services::session::SessionStore;
use bl_core::services::token::{TokenService, TokenServiceConfig};
use bl_infra::cache::{RedisClient, RedisTtlStore};
use bl_infra::database::{DatabasePool, MySqlMealRepository, MySqlMemberRepository};
use bl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting BiteLog API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.auth.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; tokens are signed with the development secret");
    }

    // Database pool
    let database_pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to create database pool")?;
    if !database_pool.health_check().await? {
        anyhow::bail!("Database reported unhealthy at startup");
    }
    info!("Database connection established");

    // Redis-backed session store
    let redis_client = RedisClient::new(config.cache.clone())
        .await
        .context("Failed to connect to Redis")?;
    if !redis_client.health_check().await? {
        anyhow::bail!("Redis reported unhealthy at startup");
    }
    info!("Redis connection established");

    // Repositories
    let member_repository = Arc::new(MySqlMemberRepository::new(database_pool.get_pool().clone()));
    let meal_repository = Arc::new(MySqlMealRepository::new(database_pool.get_pool().clone()));

    // Services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let session_store = SessionStore::new(Arc::new(RedisTtlStore::new(redis_client)));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&member_repository),
        Arc::clone(&token_service),
        session_store.clone(),
        AuthServiceConfig::from(&config.auth),
    ));
    let member_service = Arc::new(MemberService::new(Arc::clone(&member_repository)));
    let meal_service = Arc::new(MealService::new(
        Arc::clone(&meal_repository),
        Arc::clone(&member_repository),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        member_service,
        meal_service,
        token_service,
        session_store,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let server = HttpServer::new(move || create_app(app_state.clone()));
    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Shutting down, closing database pool");
    database_pool.close().await;

    Ok(())
}
