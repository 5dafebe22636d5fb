//! Database row types: these map directly to SQLite rows.
//! Distinct from scribe-types view models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: String,
    pub created_at: String,
}

/// A post joined with its author's username.
#[derive(Debug, Clone)]
pub struct PostWithAuthorRow {
    pub post: PostRow,
    pub author_username: String,
}

pub struct NewPost<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub author_id: &'a str,
    pub created_at: &'a str,
}
