use serde::Serialize;

/// A post as handed to the view layer. `title` and `body` hold tag-stripped,
/// HTML-safe text; `body_html` is the rendered and allow-list filtered body.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub body_html: String,
    pub author_id: String,
    pub author_username: String,
    pub created_at: String,
}

/// A dashboard entry.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

/// Values a post form is re-rendered with after a validation failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostDraft {
    pub id: Option<String>,
    pub title: String,
    pub body: String,
}
