use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- Session --

/// Hours a freshly issued session claim stays valid.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Signed session claims carried in the session cookie. Shared between
/// scribe-crypto (signing/verification) and scribe-api (request identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: usize,
}

impl Claims {
    /// Claims for `user_id` expiring [`SESSION_TTL_HOURS`] from now.
    pub fn new(user_id: Uuid, username: &str) -> Self {
        Self::expiring_at(
            user_id,
            username,
            chrono::Utc::now() + chrono::Duration::hours(SESSION_TTL_HOURS),
        )
    }

    pub fn expiring_at(user_id: Uuid, username: &str, at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            sub: user_id,
            username: username.to_string(),
            exp: at.timestamp().max(0) as usize,
        }
    }
}

// -- Forms --

/// A form built from raw `name=value` pairs. A field counts only when it
/// appears exactly once; missing or repeated fields read as blank input, so
/// odd submissions reach validation instead of being rejected.
pub trait FormFields: Default {
    fn from_fields(fields: &[(String, String)]) -> Self;
}

/// Value of `name` when it occurs exactly once, otherwise `""`.
pub fn single_field(fields: &[(String, String)], name: &str) -> String {
    let mut matches = fields.iter().filter(|(key, _)| key == name);
    match (matches.next(), matches.next()) {
        (Some((_, value)), None) => value.clone(),
        _ => String::new(),
    }
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

impl FormFields for RegisterForm {
    fn from_fields(fields: &[(String, String)]) -> Self {
        Self {
            username: single_field(fields, "username"),
            password: single_field(fields, "password"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl FormFields for LoginForm {
    fn from_fields(fields: &[(String, String)]) -> Self {
        Self {
            username: single_field(fields, "username"),
            password: single_field(fields, "password"),
        }
    }
}

#[derive(Debug, Default)]
pub struct PostForm {
    pub title: String,
    pub body: String,
}

impl FormFields for PostForm {
    fn from_fields(fields: &[(String, String)]) -> Self {
        Self {
            title: single_field(fields, "title"),
            body: single_field(fields, "body"),
        }
    }
}
