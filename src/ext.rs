//! Extension trait for annotating `Result` values in place.
//!
//! Wrapping an error on the way up the stack otherwise needs a `match` at
//! every propagation point, because `map_err` closures cannot forward the
//! caller's location. [`ResultExt`] folds the match into the trait method,
//! so each call site reads as a single annotation and is tagged with that
//! site.

use alloc::string::String;

use crate::annotate::{CausePredicate, because_on, note_on, wrap_on};
use crate::capability::SharedError;

/// Annotation methods on `Result<T, SharedError>`.
///
/// ```rust
/// use errnote::{ResultExt, SharedError, new};
///
/// fn read_index() -> Result<(), SharedError> {
///     Err(new("truncated header"))
/// }
///
/// fn open_store() -> Result<(), SharedError> {
///     read_index().annotate("opening store")
/// }
///
/// let err = open_store().unwrap_err();
/// assert_eq!(err.to_string(), "opening store: truncated header");
/// ```
pub trait ResultExt<T> {
    /// Annotate the error with a message, preserving its cause.
    /// Equivalent to [`note`](crate::note) with no predicate.
    #[track_caller]
    fn annotate(self, message: impl Into<String>) -> Result<T, SharedError>;

    /// Annotate the error with a message, keeping its cause only when the
    /// predicate accepts it. Equivalent to [`note`](crate::note).
    #[track_caller]
    fn annotate_if(
        self,
        should_preserve_cause: CausePredicate<'_>,
        message: impl Into<String>,
    ) -> Result<T, SharedError>;

    /// Annotate the error and attribute it to an explicit cause.
    /// Equivalent to [`because`](crate::because).
    #[track_caller]
    fn attribute(self, cause: SharedError, message: impl Into<String>) -> Result<T, SharedError>;

    /// Tag the caller's call site onto the error without adding text.
    /// Equivalent to [`wrap`](crate::wrap).
    #[track_caller]
    fn located(self) -> Result<T, SharedError>;
}

impl<T> ResultExt<T> for Result<T, SharedError> {
    #[track_caller]
    fn annotate(self, message: impl Into<String>) -> Result<T, SharedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(note_on(err, None, message.into())),
        }
    }

    #[track_caller]
    fn annotate_if(
        self,
        should_preserve_cause: CausePredicate<'_>,
        message: impl Into<String>,
    ) -> Result<T, SharedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(note_on(err, Some(should_preserve_cause), message.into())),
        }
    }

    #[track_caller]
    fn attribute(self, cause: SharedError, message: impl Into<String>) -> Result<T, SharedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(because_on(err, Some(cause), message.into())),
        }
    }

    #[track_caller]
    fn located(self) -> Result<T, SharedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_on(err)),
        }
    }
}
