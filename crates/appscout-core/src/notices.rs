//! Non-fatal failures collected while building a result.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Recoverable failure, kept next to the entity it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Record and log a warning.
    pub fn warning<T: Into<String>>(message: T) -> Self {
        let message = message.into();
        tracing::warn!("{}", message);
        Self {
            level: NoticeLevel::Warning,
            message,
        }
    }

    /// Record and log an error.
    pub fn error<T: Into<String>>(message: T) -> Self {
        let message = message.into();
        tracing::error!("{}", message);
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            NoticeLevel::Warning => write!(f, "WARNING: {}", self.message),
            NoticeLevel::Error => write!(f, "ERROR: {}", self.message),
        }
    }
}

/// A value, with the notices raised while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Noted<T> {
    pub value: T,
    pub notices: Vec<Notice>,
}

impl<T> Noted<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            notices: vec![],
        }
    }

    pub fn with_notice(value: T, notice: Notice) -> Self {
        Self {
            value,
            notices: vec![notice],
        }
    }

    pub fn into_parts(self) -> (T, Vec<Notice>) {
        (self.value, self.notices)
    }
}
