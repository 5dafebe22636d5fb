use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEV_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    /// True when no secret was configured and [`DEV_SECRET`] is in use.
    pub using_dev_secret: bool,
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("SCRIBE_JWT_SECRET").filter(|s| !s.is_empty());
        let using_dev_secret = secret.is_none();

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            None => 3000,
        };

        Ok(Self {
            jwt_secret: secret.unwrap_or_else(|| DEV_SECRET.into()),
            using_dev_secret,
            host: lookup("SCRIBE_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            db_path: lookup("SCRIBE_DB_PATH")
                .unwrap_or_else(|| "scribe.db".into())
                .into(),
            public_dir: lookup("SCRIBE_PUBLIC_DIR")
                .unwrap_or_else(|| "public".into())
                .into(),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
