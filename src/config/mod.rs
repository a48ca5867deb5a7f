//! Runtime configuration, resolved once at startup.
//!
//! Nothing else in the crate reads the environment or the home directory:
//! `main` builds a [`Config`] and hands its pieces to the cache and the
//! grammar checker.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::consts::{API_KEY_ENV, API_URL, API_URL_ENV, LANGUAGE, default_db_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TextGears API key. Empty when unset; the API reports the failure.
    pub api_key: String,
    pub db_path: PathBuf,
    pub endpoint: String,
    pub language: String,
}

impl Config {
    /// Build from the process environment. `db` overrides the default path.
    pub fn from_env(db: Option<PathBuf>) -> Result<Self> {
        Self::resolve(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
            dirs::home_dir(),
            db,
        )
    }

    /// Pure form of [`Config::from_env`].
    pub fn resolve(
        api_key: Option<String>,
        endpoint: Option<String>,
        home: Option<PathBuf>,
        db: Option<PathBuf>,
    ) -> Result<Self> {
        let db_path = match db {
            Some(path) => path,
            None => {
                let home = home.context("cannot determine home directory")?;
                default_db_path(&home)
            }
        };

        Ok(Self {
            api_key: api_key.unwrap_or_default(),
            db_path,
            endpoint: endpoint
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| API_URL.to_string()),
            language: LANGUAGE.to_string(),
        })
    }
}
