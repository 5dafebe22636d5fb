//! Form extractor that never rejects.
//!
//! `axum::Form` answers a repeated field with 422 and a missing or wrong
//! Content-Type with 415. Here the body is read as raw pairs instead, and a
//! body that cannot be read at all becomes an empty form, so every submission
//! reaches validation and gets the usual re-rendered error list.

use std::convert::Infallible;

use axum::{
    Form,
    extract::{FromRequest, Request},
};
use tracing::debug;

use scribe_types::api::FormFields;

#[derive(Debug)]
pub struct LenientForm<T>(pub T);

impl<S, T> FromRequest<S> for LenientForm<T>
where
    S: Send + Sync,
    T: FormFields,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(fields)) => fields,
            Err(e) => {
                debug!("Unreadable form body, treating as empty: {}", e);
                Vec::new()
            }
        };
        Ok(LenientForm(T::from_fields(&fields)))
    }
}
