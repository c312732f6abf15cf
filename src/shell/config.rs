//! Service configuration read from the environment.
//!
//! `main` loads a `.env` file first with `dotenvy`, so every variable below can live there.
//!
//! | Variable | Default |
//! |---|---|
//! | `PAY_RUNS_BIND_ADDR` | `0.0.0.0:8080` |
//! | `PAY_RUNS_TOPIC` | `pay-runs.v1` |
//! | `PAY_RUNS_EMPLOYEES_FILE` | unset, uses the built-in roster |

use crate::modules::pay_runs::core::employee::Employee;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TOPIC: &str = "pay-runs.v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PAY_RUNS_BIND_ADDR is not a socket address ({value}): {source}")]
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("PAY_RUNS_TOPIC must not be blank")]
    BlankTopic,

    #[error("cannot read employees file {path}: {source}")]
    EmployeesFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("employees file {path} is not a JSON list of {{id, name}}: {source}")]
    EmployeesFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub topic: String,
    pub employees_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset, except a blank
    /// topic, which is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("PAY_RUNS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let topic = match lookup("PAY_RUNS_TOPIC") {
            None => DEFAULT_TOPIC.to_string(),
            Some(topic) if topic.trim().is_empty() => return Err(ConfigError::BlankTopic),
            Some(topic) => topic.trim().to_string(),
        };

        Ok(Self {
            bind_addr,
            topic,
            employees_file: get("PAY_RUNS_EMPLOYEES_FILE").map(PathBuf::from),
        })
    }

    pub fn load_employees(&self) -> Result<Vec<Employee>, ConfigError> {
        let Some(path) = &self.employees_file else {
            return Ok(default_employees());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::EmployeesFile {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::EmployeesFormat {
            path: path.clone(),
            source,
        })
    }
}

pub fn default_employees() -> Vec<Employee> {
    [
        ("E1", "Asha Rao"),
        ("E2", "Bilal Khan"),
        ("E3", "Chen Wei"),
        ("E4", "Divya Menon"),
    ]
    .into_iter()
    .map(|(id, name)| Employee {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}
