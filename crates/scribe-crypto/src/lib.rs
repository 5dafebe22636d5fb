//! Scribe Crypto Library
//!
//! Password hashing (Argon2id, PHC strings with embedded salt) and session
//! token signing (HS256 JWT carrying [`scribe_types::api::Claims`]).
//!
//! Session tokens are stateless: there is no server-side session table, so a
//! token stays valid until its embedded expiry unless the secret is rotated.

pub mod password;
pub mod token;
