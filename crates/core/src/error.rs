use thiserror::Error;

/// Result type for rankeval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rankeval operations
#[derive(Error, Debug)]
pub enum Error {
    /// A metric has no defined value for its input
    #[error("Undefined metric {metric}: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates an undefined metric error
    pub fn undefined_metric(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::UndefinedMetric {
            metric,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Adds context to any error
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Returns true if this error, or the error it wraps, is an undefined metric
    pub fn is_undefined_metric(&self) -> bool {
        match self {
            Self::UndefinedMetric { .. } => true,
            Self::WithContext { source, .. } => source
                .downcast_ref::<Error>()
                .is_some_and(Error::is_undefined_metric),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}
