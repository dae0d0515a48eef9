use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr};

use rara_ir::CodeLocation;

use crate::ErrorCode;

/// Result type for fallible tokenizer operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// An error code together with a diagnostic message.
///
/// Equality and hashing look at the code only: the same condition raised
/// with two different messages is the same error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message} [{code}]")]
pub struct ScanError {
    code: ErrorCode,
    message: Cow<'static, str>,
    location: Option<CodeLocation>,
}

impl ScanError {
    /// Create an error carrying the code's default message.
    pub fn new(code: ErrorCode) -> Self {
        ScanError {
            code,
            message: Cow::Borrowed(code.message()),
            location: None,
        }
    }

    /// Create an error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        ScanError {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attach the location the error refers to.
    #[must_use]
    pub fn at(mut self, location: CodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn location(&self) -> Option<CodeLocation> {
        self.location
    }

    /// Check if any of `code`'s conditions are part of this error.
    #[inline]
    pub fn intersects(&self, code: ErrorCode) -> bool {
        self.code.intersects(code)
    }
}

impl PartialEq for ScanError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ScanError {}

impl Hash for ScanError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<ErrorCode> for ScanError {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.code == *other
    }
}

impl From<ErrorCode> for ScanError {
    fn from(code: ErrorCode) -> Self {
        ScanError::new(code)
    }
}

/// Combine two errors: codes are OR-ed, messages joined.
///
/// The location of the left-hand error wins when both have one.
impl BitOr for ScanError {
    type Output = ScanError;

    fn bitor(self, rhs: ScanError) -> ScanError {
        let message = if self.message.is_empty() {
            rhs.message
        } else if rhs.message.is_empty() {
            self.message
        } else {
            Cow::Owned(format!("{}; {}", self.message, rhs.message))
        };
        ScanError {
            code: self.code | rhs.code,
            message,
            location: self.location.or(rhs.location),
        }
    }
}

impl BitOr<ErrorCode> for ScanError {
    type Output = ScanError;

    fn bitor(mut self, rhs: ErrorCode) -> ScanError {
        self.code |= rhs;
        self
    }
}

/// Mask an error's code, keeping its message.
impl BitAnd<ErrorCode> for ScanError {
    type Output = ScanError;

    fn bitand(mut self, rhs: ErrorCode) -> ScanError {
        self.code &= rhs;
        self
    }
}
