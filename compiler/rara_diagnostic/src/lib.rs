//! Error reporting for the Rara tokenizer.
//!
//! Errors are values, never panics. A [`ScanError`] pairs an [`ErrorCode`]
//! bitflag set with a human-readable message:
//!
//! - Codes combine with `|` so one error can report several conditions at
//!   once (e.g. both a leftward and a rightward construct left open).
//! - Two errors compare equal when their codes are equal, whatever their
//!   messages say.
//!
//! ```text
//! let err = ScanError::new(ErrorCode::UNTERMINATED_RIGHT)
//!     | ScanError::new(ErrorCode::UNTERMINATED_LEFT);
//! assert!(err.code().contains(ErrorCode::UNTERMINATED_LEFT));
//! ```

mod error;
mod error_code;

pub use error::{ScanError, ScanResult};
pub use error_code::ErrorCode;
