//! One-shot action outcomes
//!
//! Mutating actions hand back a [`Notice`] for the caller to show once,
//! instead of stashing a message in shared state.

use std::fmt;

use crate::error::TrackerError;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// Short prefix for terminal output
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A message produced by a single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Surface a recoverable error as a notice
    ///
    /// Validation messages are shown verbatim.
    pub fn from_error(err: &TrackerError) -> Self {
        match err {
            TrackerError::Validation(e) => Self::error(e.to_string()),
            other => Self::error(other.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.icon(), self.message)
    }
}
