//! Process configuration
//!
//! Invocation mirrors the classic form: `gateway <port> [recovery-file]`.
//! The optional second argument is a prior session's history log and
//! triggers startup recovery.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("usage: gateway <port> [recovery-file]")]
    MissingPort,

    #[error("invalid port {0:?}: must be a number in 1-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Prior history log to replay before accepting traffic.
    pub recovery_path: Option<PathBuf>,
    /// Directory the new history file is created in.
    pub history_dir: PathBuf,
}

impl Config {
    /// Parse process arguments (the first item is the program name).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        let _program = args.next();
        let port_arg = args.next().ok_or(ConfigError::MissingPort)?;
        let port: u16 = port_arg
            .parse()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigError::InvalidPort(port_arg.clone()))?;
        let recovery_path = args.next().map(PathBuf::from);

        Ok(Self {
            port,
            recovery_path,
            history_dir: PathBuf::from("."),
        })
    }
}
