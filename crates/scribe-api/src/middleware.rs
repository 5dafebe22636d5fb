use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use scribe_crypto::token;
use scribe_types::api::Claims;

use crate::AppState;

pub const SESSION_COOKIE: &str = "scribe_session";

/// The cookie outlives the token inside it; an expired token is still
/// rejected while the cookie persists.
const COOKIE_MAX_AGE_HOURS: i64 = 48;

/// Identity resolved for the current request, attached by [`resolve_identity`].
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Claims>);

impl CurrentUser {
    pub fn claims(&self) -> Option<&Claims> {
        self.0.as_ref()
    }
}

/// Resolve the session cookie into a [`CurrentUser`] for every request.
/// A missing, forged or expired token degrades to an anonymous request.
pub async fn resolve_identity(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = jar.get(SESSION_COOKIE).and_then(|cookie| {
        token::verify(cookie.value(), &state.jwt_secret)
            .inspect_err(|e| debug!("Ignoring session token: {}", e))
            .ok()
    });

    req.extensions_mut().insert(CurrentUser(claims));
    next.run(req).await
}

/// Gate for routes that need an identity: anonymous requests are sent to the
/// landing page. Passes the resolved [`Claims`] on as a request extension.
pub async fn require_auth(mut req: Request, next: Next) -> Response {
    let claims = req
        .extensions()
        .get::<CurrentUser>()
        .and_then(|user| user.0.clone());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => Redirect::to("/").into_response(),
    }
}

/// HTTP-only, HTTPS-only, same-site-strict session cookie.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::hours(COOKIE_MAX_AGE_HOURS))
        .build()
}

/// Removal cookie for logout.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Sign a fresh session for `user_id` and attach it to `jar`.
pub fn start_session(
    jar: CookieJar,
    secret: &str,
    user_id: uuid::Uuid,
    username: &str,
) -> anyhow::Result<CookieJar> {
    let token = token::sign(&Claims::new(user_id, username), secret)?;
    Ok(jar.add(session_cookie(token)))
}
