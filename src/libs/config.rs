//! Runtime configuration for the server and the terminal client.
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file in the working directory. Command-line flags override them.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DATABASE_URL` | SQLite path, `sqlite://` URL or `:memory:` | `taskboard.db` in the data directory |
//! | `HOST` | Address the server binds to | `0.0.0.0` |
//! | `PORT` | Port the server binds to | `3000` |
//! | `STATIC_DIR` | Built client bundle served for non-API paths | `client/dist` |
//! | `TASKBOARD_API_URL` | Server base URL used by client commands | `http://127.0.0.1:3000` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("binding to {}", config.bind_address()?);
//! println!("database at {}", config.database_url()?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Fully resolved settings shared by the `serve` command and the client commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the task table lives. `None` means the default file in the data
    /// directory, resolved by [`Config::database_url`].
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` and the rest of the client bundle.
    pub static_dir: PathBuf,
    /// Base URL of a running server, used by `list`, `add`, `toggle` and `delete`.
    pub api_url: String,
}

impl Config {
    /// Loads `.env` (if present) and reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. A `PORT` that is not a valid port
    /// number is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        let port = match get("PORT") {
            Some(port) => port.parse::<u16>().with_context(|| format!("PORT must be a port number, got '{}'", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            api_url: get("TASKBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// The configured `DATABASE_URL`, or the default file in the data directory.
    ///
    /// Only the commands that open the database call this, so client commands
    /// never create the data directory.
    pub fn database_url(&self) -> Result<String> {
        match &self.database_url {
            Some(url) => Ok(url.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?.to_string_lossy().into_owned()),
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
