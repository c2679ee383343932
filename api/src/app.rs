//! Application factory
//!
//! Builds the Actix-web application: middleware stack, route table, and the
//! authentication gate wrapped around everything. The route paths here and
//! the access rules in `middleware::policy` are two views of the same
//! table; a new route needs an entry in both.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use crate::middleware::{auth::JwtAuthGate, cors::create_cors, security::SecurityMiddleware};
use crate::routes::auth::{join::join, login::login, logout::logout, reissue::reissue};
use crate::routes::meal::{add::add_meal, delete::delete_meal, log::meal_log, update::update_meal};
use crate::routes::member::{list::list_members, profile::profile};
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Create and configure the application with all dependencies
pub fn create_app<M, L, S>(
    app_state: web::Data<AppState<M, L, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    // The gate shares the token codec and session store with the handlers
    let auth_gate = JwtAuthGate::new(
        Arc::clone(&app_state.token_service),
        app_state.session_store.clone(),
    );

    let cors = create_cors();
    let security = SecurityMiddleware::new();

    App::new()
        .app_data(app_state)
        // Request order: security, CORS, logging, then the gate. The gate
        // is registered first so it runs innermost, right before routing.
        .wrap(auth_gate)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Session lifecycle
        .route("/join", web::post().to(join::<M, L, S>))
        .route("/login", web::post().to(login::<M, L, S>))
        .route("/log-out", web::post().to(logout::<M, L, S>))
        .route("/reissue", web::post().to(reissue::<M, L, S>))
        // Member routes
        .route("/user/{user_id}", web::get().to(profile::<M, L, S>))
        .route("/user/{user_id}/meals", web::get().to(meal_log::<M, L, S>))
        .route("/admin/members", web::get().to(list_members::<M, L, S>))
        // Meal routes
        .route("/meal/add", web::post().to(add_meal::<M, L, S>))
        .route("/meal/{meal_id}/update", web::put().to(update_meal::<M, L, S>))
        .route("/meal/{meal_id}/delete", web::delete().to(delete_meal::<M, L, S>))
        // Service endpoints
        .route("/health", web::get().to(health_check))
        .route("/", web::get().to(api_index))
        // Default 404 handler; unmapped paths still pass the gate first
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bitelog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API index endpoint
async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "BiteLog API",
        "endpoints": {
            "health": "/health",
            "auth": {
                "join": { "path": "/join", "method": "POST" },
                "login": { "path": "/login", "method": "POST" },
                "logout": { "path": "/log-out", "method": "POST", "requires_auth": true },
                "reissue": { "path": "/reissue", "method": "POST" }
            },
            "member": {
                "profile": { "path": "/user/{user_id}", "method": "GET", "requires_auth": true },
                "meal_log": { "path": "/user/{user_id}/meals", "method": "GET", "requires_auth": true },
                "admin_members": { "path": "/admin/members", "method": "GET", "requires_role": "ADMIN" }
            },
            "meal": {
                "add": { "path": "/meal/add", "method": "POST", "requires_auth": true },
                "update": { "path": "/meal/{meal_id}/update", "method": "PUT", "requires_auth": true },
                "delete": { "path": "/meal/{meal_id}/delete", "method": "DELETE", "requires_auth": true }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
