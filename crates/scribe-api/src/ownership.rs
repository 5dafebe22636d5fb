//! Post ownership checks.
//!
//! A missing post and a post owned by someone else are indistinguishable to
//! the caller: both end in a redirect to the landing page.

use scribe_db::models::PostRow;
use scribe_types::api::Claims;

use crate::AppState;
use crate::error::AppError;

pub fn is_author(post: &PostRow, identity: Option<&Claims>) -> bool {
    identity.is_some_and(|claims| post.author_id == claims.sub.to_string())
}

/// Load a post for mutation. `None` when it does not exist or `claims` is
/// not its author.
pub async fn owned_post(
    state: &AppState,
    post_id: &str,
    claims: &Claims,
) -> Result<Option<PostRow>, AppError> {
    let id = post_id.to_string();
    let post = state.blocking(move |db| db.get_post(&id)).await?;
    Ok(post.filter(|p| is_author(p, Some(claims))))
}
