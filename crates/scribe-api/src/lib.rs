pub mod auth;
pub mod error;
pub mod form;
pub mod middleware;
pub mod ownership;
pub mod posts;
pub mod sanitize;
pub mod validation;
pub mod views;

use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};

use scribe_db::Database;

use crate::error::AppError;
use crate::middleware::{require_auth, resolve_identity};
use crate::views::Views;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
    pub views: Views,
}

impl AppStateInner {
    /// Run a store call on the blocking pool. Store failures are not
    /// retried; they fail the request.
    pub async fn blocking<F, T>(self: &Arc<Self>, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);
        let result = tokio::task::spawn_blocking(move || f(&state.db)).await?;
        Ok(result?)
    }
}

/// All application routes. Every request passes through the identity
/// resolver; the post mutation routes additionally require an identity.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(posts::home))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", post(auth::register))
        .route("/post/{id}", get(posts::view_post));

    let protected_routes = Router::new()
        .route("/create-post", get(posts::create_form).post(posts::create_post))
        .route("/edit-post/{id}", get(posts::edit_form).post(posts::edit_post))
        .route("/delete-post/{id}", post(posts::delete_post))
        .layer(from_fn(require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(from_fn_with_state(state.clone(), resolve_identity))
        .with_state(state)
}
