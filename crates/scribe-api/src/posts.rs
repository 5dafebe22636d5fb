use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;
use uuid::Uuid;

use scribe_db::models::{NewPost, PostRow};
use scribe_types::api::{Claims, PostForm};
use scribe_types::models::{PostDraft, PostSummary, PostView};

use crate::AppState;
use crate::error::AppError;
use crate::form::LenientForm;
use crate::middleware::CurrentUser;
use crate::ownership::{is_author, owned_post};
use crate::sanitize::render_markup;
use crate::validation::{PostInput, check_post};
use crate::views::Views;

/// GET /: the signed-in user's dashboard, or the landing page.
pub async fn home(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let mut ctx = Views::context(current.claims());

    let Some(claims) = current.claims() else {
        return Ok(state.views.render("home.html", &ctx)?.into_response());
    };

    let author_id = claims.sub.to_string();
    let rows = state
        .blocking(move |db| db.list_posts_by_author(&author_id))
        .await?;

    let posts: Vec<PostSummary> = rows
        .into_iter()
        .map(|row| PostSummary {
            created_at: display_date(&row.created_at),
            id: row.id,
            title: row.title,
        })
        .collect();

    ctx.insert("posts", &posts);
    Ok(state.views.render("dashboard.html", &ctx)?.into_response())
}

/// GET /post/{id}: readable by anyone; owner controls only for the author.
pub async fn view_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let row = state
        .blocking(move |db| db.get_post_with_author(&post_id))
        .await?;

    let Some(row) = row else {
        return Ok(Redirect::to("/").into_response());
    };

    let is_author = is_author(&row.post, current.claims());
    let post = PostView {
        body_html: render_markup(&row.post.body),
        created_at: display_date(&row.post.created_at),
        id: row.post.id,
        title: row.post.title,
        body: row.post.body,
        author_id: row.post.author_id,
        author_username: row.author_username,
    };

    let mut ctx = Views::context(current.claims());
    ctx.insert("post", &post);
    ctx.insert("is_author", &is_author);
    Ok(state.views.render("single-post.html", &ctx)?.into_response())
}

/// GET /create-post
pub async fn create_form(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, AppError> {
    render_form(&state, &claims, "create-post.html", PostDraft::default(), Vec::new())
}

/// POST /create-post
pub async fn create_post(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    LenientForm(form): LenientForm<PostForm>,
) -> Result<Response, AppError> {
    let (input, errors) = check_post(&form);
    if !errors.is_empty() {
        return render_form(&state, &claims, "create-post.html", draft(None, input), errors);
    }

    let post_id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let (id, author_id) = (post_id.clone(), claims.sub.to_string());
    state
        .blocking(move |db| {
            db.insert_post(&NewPost {
                id: &id,
                title: &input.title,
                body: &input.body,
                author_id: &author_id,
                created_at: &created_at,
            })
        })
        .await?;

    info!("Post {} created by {}", post_id, claims.sub);
    Ok(Redirect::to(&format!("/post/{post_id}")).into_response())
}

/// GET /edit-post/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, AppError> {
    let Some(post) = owned_post(&state, &post_id, &claims).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let draft = draft_from_row(post);
    render_form(&state, &claims, "edit-post.html", draft, Vec::new())
}

/// POST /edit-post/{id}: replaces title and body; the creation time stays.
pub async fn edit_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Extension(claims): Extension<Claims>,
    LenientForm(form): LenientForm<PostForm>,
) -> Result<Response, AppError> {
    if owned_post(&state, &post_id, &claims).await?.is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    let (input, errors) = check_post(&form);
    if !errors.is_empty() {
        let draft = draft(Some(post_id), input);
        return render_form(&state, &claims, "edit-post.html", draft, errors);
    }

    let id = post_id.clone();
    state
        .blocking(move |db| db.update_post(&id, &input.title, &input.body))
        .await?;

    info!("Post {} edited by {}", post_id, claims.sub);
    Ok(Redirect::to(&format!("/post/{post_id}")).into_response())
}

/// POST /delete-post/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, AppError> {
    if owned_post(&state, &post_id, &claims).await?.is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    let id = post_id.clone();
    state.blocking(move |db| db.delete_post(&id)).await?;

    info!("Post {} deleted by {}", post_id, claims.sub);
    Ok(Redirect::to("/").into_response())
}

fn render_form(
    state: &AppState,
    claims: &Claims,
    template: &str,
    draft: PostDraft,
    errors: Vec<String>,
) -> Result<Response, AppError> {
    let mut ctx = Views::context(Some(claims));
    ctx.insert("draft", &draft);
    ctx.insert("errors", &errors);
    Ok(state.views.render(template, &ctx)?.into_response())
}

fn draft(id: Option<String>, input: PostInput) -> PostDraft {
    PostDraft {
        id,
        title: input.title,
        body: input.body,
    }
}

fn draft_from_row(row: PostRow) -> PostDraft {
    PostDraft {
        id: Some(row.id),
        title: row.title,
        body: row.body,
    }
}

/// Human-readable form of a stored RFC 3339 timestamp. Unparsable values are
/// shown as stored.
fn display_date(stored: &str) -> String {
    DateTime::parse_from_rfc3339(stored)
        .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_formats_rfc3339() {
        assert_eq!(display_date("2026-10-17T09:30:00.000000Z"), "October 17, 2026");
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
