use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use scribe_types::api::Claims;

/// Sign claims into a compact HS256 token. The expiry travels inside the
/// signed payload.
pub fn sign(claims: &Claims, secret: &str) -> Result<String> {
    let token = encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verify signature and expiry, returning the embedded claims.
/// Fails on a bad signature, a malformed token or an elapsed expiry.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is exact: no grace period past `exp`.
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const SECRET: &str = "test-secret";

    #[test]
    fn sign_verify_roundtrip() {
        let claims = Claims::new(Uuid::new_v4(), "alice");
        let token = sign(&claims, SECRET).unwrap();
        assert_eq!(verify(&token, SECRET).unwrap(), claims);
    }

    #[test]
    fn wrong_secret_fails() {
        let claims = Claims::new(Uuid::new_v4(), "alice");
        let token = sign(&claims, SECRET).unwrap();
        assert!(verify(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_fails() {
        let past = chrono::Utc::now() - chrono::Duration::minutes(5);
        let claims = Claims::expiring_at(Uuid::new_v4(), "alice", past);
        let token = sign(&claims, SECRET).unwrap();
        assert!(verify(&token, SECRET).is_err());
    }

    #[test]
    fn tampered_payload_fails() {
        let claims = Claims::new(Uuid::new_v4(), "alice");
        let token = sign(&claims, SECRET).unwrap();

        let forged = Claims::new(Uuid::new_v4(), "mallory");
        let forged_token = sign(&forged, "attacker-secret").unwrap();

        // Splice the forged payload onto the genuine signature.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged_token.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);
        assert!(verify(&spliced, SECRET).is_err());
    }

    #[test]
    fn garbage_fails() {
        assert!(verify("", SECRET).is_err());
        assert!(verify("not.a.token", SECRET).is_err());
    }
}
