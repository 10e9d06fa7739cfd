//! Error types.
//!
//! Two layers, kept deliberately separate:
//!
//! - [`AppError`] — an application-boundary error with a process exit code.
//!   Anything that should end the run (unreadable data directory, bad CLI
//!   input) becomes one of these.
//! - [`MalformedDocument`] / [`AtBatError`] — per-record conditions that the
//!   ingest pipeline absorbs locally. A bad file or a bad at-bat is skipped
//!   and reported; it never aborts the run.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// A candidate game-log file failed to parse as an XML document.
///
/// No partial-tree recovery is attempted: a malformed file contributes zero
/// at-bats. The pipeline records the file and moves on.
#[derive(Debug, Clone)]
pub struct MalformedDocument {
    message: String,
}

impl MalformedDocument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for MalformedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed document: {}", self.message)
    }
}

impl std::error::Error for MalformedDocument {}

/// Why a single at-bat could not be classified.
///
/// The outcome table is treated as exhaustive over well-formed real data, so
/// [`AtBatError::UnknownOutcomeEvent`] signals a configuration/data bug. It is
/// surfaced distinctly rather than silently defaulted; the pipeline's policy
/// is to skip the at-bat and report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtBatError {
    /// The `event` attribute names an outcome the classifier table lacks.
    UnknownOutcomeEvent { event: String },
    /// A required at-bat attribute (`event`, `p_throws`, `stand`) is absent.
    MissingAttribute { name: &'static str },
    /// A handedness attribute carried something other than `L` or `R`.
    UnknownHandedness { value: String },
}

impl std::fmt::Display for AtBatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtBatError::UnknownOutcomeEvent { event } => {
                write!(f, "unknown outcome event '{event}'")
            }
            AtBatError::MissingAttribute { name } => {
                write!(f, "missing required attribute '{name}'")
            }
            AtBatError::UnknownHandedness { value } => {
                write!(f, "unknown handedness code '{value}'")
            }
        }
    }
}

impl std::error::Error for AtBatError {}
