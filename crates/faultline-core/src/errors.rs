use thiserror::Error;

/// Result type alias using FaultlineError
pub type Result<T> = std::result::Result<T, FaultlineError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lifecycle
    AlreadyInitialized,

    // Backend
    BackendInit,
    InvalidDsn,

    // Configuration
    Config,
}

impl ExErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AlreadyInitialized => "ERR_ALREADY_INITIALIZED",
            ExErrorKind::BackendInit => "ERR_BACKEND_INIT",
            ExErrorKind::InvalidDsn => "ERR_INVALID_DSN",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Structured error carrying a stable kind, the failing operation and a
/// human-readable message
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

/// Errors reported by the logging façade and its collaborators
///
/// Logging calls themselves never return errors; only `init`, DSN parsing
/// and configuration loading do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaultlineError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("failed to initialize error backend: {reason}")]
    BackendInit { reason: String },

    #[error("invalid DSN: {reason}")]
    InvalidDsn { reason: String },

    #[error("invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

impl FaultlineError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            FaultlineError::AlreadyInitialized => ExErrorKind::AlreadyInitialized,
            FaultlineError::BackendInit { .. } => ExErrorKind::BackendInit,
            FaultlineError::InvalidDsn { .. } => ExErrorKind::InvalidDsn,
            FaultlineError::Config { .. } => ExErrorKind::Config,
        }
    }

    /// Wrap a connector failure as the cause of a failed `init`
    pub fn into_backend_init(self) -> Self {
        match self {
            FaultlineError::BackendInit { .. } => self,
            other => FaultlineError::BackendInit {
                reason: other.to_string(),
            },
        }
    }
}

impl From<FaultlineError> for ExError {
    fn from(err: FaultlineError) -> Self {
        let message = err.to_string();
        match err {
            FaultlineError::AlreadyInitialized => ExError::new(ExErrorKind::AlreadyInitialized)
                .with_op("init")
                .with_message(message),

            FaultlineError::BackendInit { .. } => ExError::new(ExErrorKind::BackendInit)
                .with_op("init")
                .with_message(message),

            FaultlineError::InvalidDsn { .. } => ExError::new(ExErrorKind::InvalidDsn)
                .with_op("parse_dsn")
                .with_message(message),

            FaultlineError::Config { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),
        }
    }
}
