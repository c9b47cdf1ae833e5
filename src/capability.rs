//! Capability traits for chain participation, and the dispatch seam that
//! lets traversal code test for them at runtime.
//!
//! An error value may support any subset of three independent capabilities:
//!
//! - [`Causer`]: the error can name a (possibly different) root cause
//! - [`Wrapper`]: the error annotates another error with its own message
//! - [`Located`]: the error carries the source location that produced it
//!
//! Rust has no way to ask a `&dyn Error` whether it happens to implement
//! some other trait, so the runtime capability test is expressed through
//! [`ChainError`]: an object-safe trait whose `as_*` query methods default
//! to `None`. Implementors override exactly the queries for the
//! capabilities they support. The resolver and formatter in
//! [`report`](crate::report) call these queries at every traversal step
//! instead of assuming a concrete type.

use alloc::sync::Arc;
use core::error::Error;
use core::fmt;

use crate::location::SourceLocation;

/// Shared handle to any error participating in an annotation chain.
///
/// Chains are built from pre-existing handles and links are never mutated
/// after construction, so handles are safe to clone and share across
/// threads. Identity (the "same error" relation used by
/// [`is`](crate::is) and cause attribution) is `Arc` pointer identity, not
/// value equality.
pub type SharedError = Arc<dyn ChainError>;

// ============================================================================
// Capability traits
// ============================================================================

/// Capability: the error can provide a cause for diagnosis.
///
/// `cause` may return `None` even when a cause conceptually exists; that is
/// how a link masks its cause. The resolver treats a masked cause exactly
/// like an absent capability and stops at the current error.
pub trait Causer {
    /// The error attributed as this error's cause, if it exposes one.
    fn cause(&self) -> Option<&SharedError>;
}

/// Capability: the error wraps another error.
///
/// Exposed so external types can take part in [`details`](crate::details)
/// traversal; it should in general not be used directly otherwise.
pub trait Wrapper {
    /// The message added at this link only, excluding anything from the
    /// underlying error. May be empty.
    fn message(&self) -> &str;

    /// The wrapped error, or `None` for a leaf.
    fn underlying(&self) -> Option<&SharedError>;
}

/// Capability: the error knows the source location that produced it.
pub trait Located {
    /// The recorded call site, or `None` if no location was ever tagged.
    fn location(&self) -> Option<SourceLocation>;
}

// ============================================================================
// ChainError - the dispatch seam
// ============================================================================

/// The contract every chain participant satisfies: a plain error plus
/// runtime-queryable capabilities.
///
/// The `as_*` methods are the Rust rendering of a dynamic capability test.
/// Each defaults to `None`; override the ones your type supports by
/// returning `Some(self)`:
///
/// ```rust
/// use core::fmt;
/// use errnote::{ChainError, Located, SourceLocation};
///
/// #[derive(Debug)]
/// struct ParseFailure {
///     loc: SourceLocation,
/// }
///
/// impl fmt::Display for ParseFailure {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "parse failure")
///     }
/// }
///
/// impl core::error::Error for ParseFailure {}
///
/// impl Located for ParseFailure {
///     fn location(&self) -> Option<SourceLocation> {
///         Some(self.loc)
///     }
/// }
///
/// impl ChainError for ParseFailure {
///     fn as_located(&self) -> Option<&dyn Located> {
///         Some(self)
///     }
/// }
/// ```
pub trait ChainError: Error + Send + Sync + 'static {
    /// Query the [`Causer`] capability.
    fn as_causer(&self) -> Option<&dyn Causer> {
        None
    }

    /// Query the [`Wrapper`] capability.
    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        None
    }

    /// Query the [`Located`] capability.
    fn as_located(&self) -> Option<&dyn Located> {
        None
    }
}

// ============================================================================
// Opaque adapter for foreign errors
// ============================================================================

/// Adapter that admits a plain error into a chain with no capabilities.
struct Opaque<E>(E);

impl<E: fmt::Debug> fmt::Debug for Opaque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<E: fmt::Display> fmt::Display for Opaque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<E: Error> Error for Opaque<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl<E: Error + Send + Sync + 'static> ChainError for Opaque<E> {}

/// Lift a foreign error into a [`SharedError`] with no capabilities.
///
/// The result is a genuinely opaque leaf: the resolver stops at it and the
/// formatter renders its full display text as the innermost line.
///
/// ```rust
/// use errnote::{details, note, opaque};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("permission denied")]
/// struct Denied;
///
/// let err = note(Some(opaque(Denied)), None, "opening state file").unwrap();
/// assert_eq!(err.to_string(), "opening state file: permission denied");
/// assert_eq!(details(Some(&err)).lines().count(), 2);
/// ```
pub fn opaque<E>(err: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(Opaque(err))
}
