//! Façade configuration
//!
//! The façade only needs two values: the backend endpoint (a Sentry DSN,
//! absent to disable remote reporting) and the environment tag attached to
//! every remote event. Both can be read from the process environment.

use faultline_core_types::Sensitive;
use std::env::VarError;

use crate::errors::{FaultlineError, Result};

/// Environment variable holding the backend DSN
pub const ENV_DSN: &str = "FAULTLINE_DSN";
/// Environment variable holding the environment tag
pub const ENV_ENVIRONMENT: &str = "FAULTLINE_ENVIRONMENT";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Values handed to `LoggerFacade::init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    /// Backend DSN; `None` disables remote reporting
    pub endpoint: Option<Sensitive<String>>,
    pub environment: String,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl FacadeConfig {
    /// Build a config, treating an empty endpoint as disabled
    pub fn new(endpoint: impl Into<String>, environment: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: (!endpoint.is_empty()).then(|| Sensitive::new(endpoint)),
            environment: environment.into(),
        }
    }

    /// Read `FAULTLINE_DSN` and `FAULTLINE_ENVIRONMENT`
    ///
    /// # Errors
    ///
    /// Returns `FaultlineError::Config` if a variable is set but is not
    /// valid unicode.
    pub fn from_env() -> Result<Self> {
        let dsn = read_env(ENV_DSN)?;
        let environment = read_env(ENV_ENVIRONMENT)?;
        Ok(Self::from_values(dsn, environment))
    }

    /// Same as `from_env` but with an injected lookup, for tests and hosts
    /// that keep settings elsewhere
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_values(lookup(ENV_DSN), lookup(ENV_ENVIRONMENT))
    }

    fn from_values(dsn: Option<String>, environment: Option<String>) -> Self {
        let endpoint = dsn
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Sensitive::new);
        let environment = environment
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());
        Self {
            endpoint,
            environment,
        }
    }

    /// Endpoint string as passed to `init`, empty when disabled
    pub fn endpoint_str(&self) -> &str {
        self.endpoint.as_ref().map(|e| e.expose().as_str()).unwrap_or("")
    }

    pub fn remote_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

fn read_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(FaultlineError::Config {
            key: key.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
