//! Shared CLI error type and exit-code mapping.

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Error category, mapped to a distinct process exit code so scripts can
/// tell rejected input from environment failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// I/O, serialization, or environment failure
    Io,
    /// Input rejected by validation (unknown skill/location)
    Validation,
    /// Broadcast attempted on an incomplete requirement
    Incomplete,
}

/// A CLI-layer error with a user-facing message.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// An I/O or environment error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// A validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An incomplete-requirement error (exit code 3).
    pub fn incomplete(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Incomplete,
            message: message.into(),
        }
    }

    /// The error category.
    pub fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Io => 1,
            CliErrorKind::Validation => 2,
            CliErrorKind::Incomplete => 3,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
