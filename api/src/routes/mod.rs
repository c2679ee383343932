//! HTTP route handlers grouped by resource.

pub mod auth;
pub mod meal;
pub mod member;

use std::sync::Arc;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;
use bl_core::services::auth::AuthService;
use bl_core::services::meal::MealService;
use bl_core::services::member::MemberService;
use bl_core::services::session::SessionStore;
use bl_core::services::token::TokenService;

/// Shared application state injected into every handler
///
/// The token service and session store also back the authentication gate,
/// so the gate and the handlers always agree on signing keys and revocation
/// state.
pub struct AppState<M, L, S>
where
    M: MemberRepository,
    L: MealRepository,
    S: TtlStore,
{
    /// Session orchestration (join, login, logout, reissue)
    pub auth_service: Arc<AuthService<M, S>>,
    /// Member profile and admin listing
    pub member_service: Arc<MemberService<M>>,
    /// Meal logging
    pub meal_service: Arc<MealService<L, M>>,
    /// Token codec shared with the authentication gate
    pub token_service: Arc<TokenService>,
    /// Session store shared with the authentication gate
    pub session_store: SessionStore<S>,
}
