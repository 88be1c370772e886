use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;

use crate::db::{CatalogStore, SqlitePool, UserStore, ValuationStore};
use crate::handlers;

/// Shared handler state: one store per concern, all over the same pool.
#[derive(Clone)]
pub struct RealtyState {
    pub users: UserStore,
    pub catalog: CatalogStore,
    pub valuations: ValuationStore,
}

impl RealtyState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            catalog: CatalogStore::new(pool.clone()),
            valuations: ValuationStore::new(pool),
        }
    }
}

pub fn realty_router(state: RealtyState) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/users/{user_id}", delete(handlers::users::delete_user))
        .route("/api/courses", get(handlers::courses::list_courses))
        .route(
            "/api/user/{user_id}/courses",
            get(handlers::courses::list_user_courses),
        )
        .route("/api/valuations", post(handlers::valuations::create_valuation))
        .route(
            "/api/user/{user_id}/valuations",
            get(handlers::valuations::list_user_valuations),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
