use std::collections::HashMap;

use axum::response::Html;
use tera::{Context, Tera, Value};

use scribe_types::api::Claims;

use crate::error::AppError;

/// Templates compiled into the binary. `.html` names are auto-escaped, so
/// only fields already sanitized are marked `safe` in the templates.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("create-post.html", include_str!("../templates/create-post.html")),
    ("edit-post.html", include_str!("../templates/edit-post.html")),
    ("single-post.html", include_str!("../templates/single-post.html")),
];

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        tera.register_filter("attr_quote", attr_quote_filter);
        Ok(Self { tera })
    }

    /// Context every view starts from: the current identity and an empty
    /// error list.
    pub fn context(user: Option<&Claims>) -> Context {
        let mut ctx = Context::new();
        ctx.insert("user", &user.map(|c| c.username.as_str()));
        ctx.insert("errors", &Vec::<String>::new());
        ctx
    }

    pub fn render(&self, name: &str, ctx: &Context) -> Result<Html<String>, AppError> {
        Ok(Html(self.tera.render(name, ctx)?))
    }
}

/// Tera filter for placing sanitized text inside a double-quoted attribute.
///
/// Sanitized text already has `<`, `>` and `&` escaped; only quotes remain.
/// Usage: `value="{{ draft.title | attr_quote | safe }}"`
fn attr_quote_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = match value.as_str() {
        Some(s) => s,
        None => return Ok(value.clone()),
    };
    Ok(Value::String(s.replace('"', "&quot;").replace('\'', "&#39;")))
}
