use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, warn};
use uuid::Uuid;

use scribe_crypto::password::{hash_password, verify_login};
use scribe_types::api::{LoginForm, RegisterForm};

use crate::AppState;
use crate::error::AppError;
use crate::form::LenientForm;
use crate::middleware::{CurrentUser, clear_session_cookie, start_session};
use crate::validation::{self, INVALID_CREDENTIALS, USERNAME_TAKEN};
use crate::views::Views;

/// POST /register: validate, create the account and sign the new user in.
pub async fn register(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    jar: CookieJar,
    LenientForm(form): LenientForm<RegisterForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim().to_string();

    let mut errors = validation::username_errors(&username);
    if !username.is_empty() {
        let name = username.clone();
        let existing = state
            .blocking(move |db| db.get_user_by_username(&name))
            .await?;
        if existing.is_some() {
            errors.push(USERNAME_TAKEN.to_string());
        }
    }
    errors.extend(validation::password_errors(&form.password));

    if !errors.is_empty() {
        return render_register_errors(&state, &current, &username, errors);
    }

    // Argon2 is CPU-bound; run it on the blocking pool.
    let password = form.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;
    let user_id = Uuid::new_v4();

    let (uid, name) = (user_id.to_string(), username.clone());
    let created = state
        .blocking(move |db| db.create_user(&uid, &name, &password_hash))
        .await?;

    // Lost a race with a concurrent registration of the same name.
    if !created {
        warn!("Username {} taken at insert time", username);
        return render_register_errors(
            &state,
            &current,
            &username,
            vec![USERNAME_TAKEN.to_string()],
        );
    }

    info!("Registered user {} ({})", username, user_id);

    let jar = start_session(jar, &state.jwt_secret, user_id, &username)?;
    Ok((jar, Redirect::to("/")).into_response())
}

fn render_register_errors(
    state: &AppState,
    current: &CurrentUser,
    username: &str,
    errors: Vec<String>,
) -> Result<Response, AppError> {
    let mut ctx = Views::context(current.claims());
    ctx.insert("errors", &errors);
    ctx.insert("username", username);
    Ok(state.views.render("home.html", &ctx)?.into_response())
}

/// GET /login
pub async fn login_form(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let ctx = Views::context(current.claims());
    Ok(state.views.render("login.html", &ctx)?.into_response())
}

/// POST /login: unknown user and wrong password fail identically.
pub async fn login(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    jar: CookieJar,
    LenientForm(form): LenientForm<LoginForm>,
) -> Result<Response, AppError> {
    let errors = validation::login_errors(&form.username, &form.password);
    if !errors.is_empty() {
        return render_login_error(&state, &current);
    }

    let username = form.username.trim().to_string();
    let name = username.clone();
    let user = state
        .blocking(move |db| db.get_user_by_username(&name))
        .await?;

    // Unknown usernames still pay for a full Argon2 verification.
    let password = form.password;
    let stored = user.as_ref().map(|u| u.password.clone());
    let verified =
        tokio::task::spawn_blocking(move || verify_login(&password, stored.as_deref())).await?;

    let Some(user) = user.filter(|_| verified) else {
        info!("Failed login for {}", username);
        return render_login_error(&state, &current);
    };

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|e| anyhow::anyhow!("Corrupt user id '{}': {}", user.id, e))?;

    let jar = start_session(jar, &state.jwt_secret, user_id, &user.username)?;
    Ok((jar, Redirect::to("/")).into_response())
}

fn render_login_error(state: &AppState, current: &CurrentUser) -> Result<Response, AppError> {
    let mut ctx = Views::context(current.claims());
    ctx.insert("errors", &[INVALID_CREDENTIALS]);
    Ok(state.views.render("login.html", &ctx)?.into_response())
}

/// GET /logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(clear_session_cookie()), Redirect::to("/"))
}
