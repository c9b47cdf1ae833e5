//! The four chain constructors and the cause-identity predicate.
//!
//! Chains are built bottom-up: the innermost error first, each constructor
//! wrapping the previous handle as its underlying. Every constructor that
//! accepts an optional error forwards `None` unchanged, so wrap-forwarding
//! call sites need no conditional.

use alloc::string::String;
use alloc::sync::Arc;

use crate::capability::SharedError;
use crate::link::Annotation;
use crate::report::cause;

/// Predicate over a resolved cause, as passed to [`note`].
pub type CausePredicate<'a> = &'a dyn Fn(&SharedError) -> bool;

/// Create a leaf error with the given message, tagged with the caller's
/// call site.
///
/// ```rust
/// let err = errnote::new("chunk index out of range");
/// assert_eq!(err.to_string(), "chunk index out of range");
/// ```
#[must_use]
#[track_caller]
#[inline]
pub fn new(message: impl Into<String>) -> SharedError {
    Annotation::new(message).into_shared()
}

/// Wrap an error without adding any text, purely to tag the caller's call
/// site onto the chain. Forwards `None` unchanged.
///
/// The new link has an empty message (its display text is the underlying's,
/// with no stray separator) and no cause attribution.
#[must_use]
#[track_caller]
#[inline]
pub fn wrap(err: Option<SharedError>) -> Option<SharedError> {
    Some(wrap_on(err?))
}

#[track_caller]
pub(crate) fn wrap_on(err: SharedError) -> SharedError {
    let mut link = Annotation::from_parts("", Some(err), None);
    link.set_location();
    link.into_shared()
}

/// Annotate an error with a message, preserving or masking its cause.
/// Forwards `None` unchanged.
///
/// The underlying error's cause is resolved first (see
/// [`cause`](crate::cause)). When `should_preserve_cause` is `None`, or
/// returns `true` for the resolved cause, that cause carries over to the
/// new link; otherwise it is masked, and resolving the new link stops at
/// the link itself. Use [`is`] to preserve only a known sentinel:
///
/// ```rust
/// use errnote::{SharedError, because, cause, is, new, note};
///
/// let timeout = new("operation timed out");
/// let err = because(Some(new("read failed")), Some(timeout.clone()), "fetching").unwrap();
///
/// // Preserved: the annotation still resolves to the timeout sentinel.
/// let kept = note(Some(err.clone()), Some(&is(&timeout)), "retry 1").unwrap();
/// assert!(is(&timeout)(&cause(&kept)));
///
/// // Masked: an always-false predicate hides the cause.
/// let masked = note(Some(err), Some(&|_: &SharedError| false), "retry 2").unwrap();
/// assert!(is(&masked)(&cause(&masked)));
/// ```
#[must_use]
#[track_caller]
#[inline]
pub fn note(
    err: Option<SharedError>,
    should_preserve_cause: Option<CausePredicate<'_>>,
    message: impl Into<String>,
) -> Option<SharedError> {
    Some(note_on(err?, should_preserve_cause, message.into()))
}

#[track_caller]
pub(crate) fn note_on(
    err: SharedError,
    should_preserve_cause: Option<CausePredicate<'_>>,
    message: String,
) -> SharedError {
    let resolved = cause(&err);
    let preserved = match should_preserve_cause {
        None => Some(resolved),
        Some(pred) if pred(&resolved) => Some(resolved),
        Some(_) => None,
    };
    let mut link = Annotation::from_parts(message, Some(err), preserved);
    link.set_location();
    link.into_shared()
}

/// Annotate an error and attribute it to an explicit cause. Returns `None`
/// only when both inputs are `None`.
///
/// This is the one constructor that lets a caller attribute an error to a
/// different root cause than its literal chain, for translating a
/// low-level failure into a domain sentinel while keeping the low-level
/// text in the diagnostics:
///
/// ```rust
/// use errnote::{because, cause, details, is, new};
///
/// let not_found = new("key not found");
/// let low = new("row missing from index");
/// let err = because(Some(low), Some(not_found.clone()), "loading profile").unwrap();
///
/// // Classification follows the sentinel...
/// assert!(is(&not_found)(&cause(&err)));
/// // ...while display and details follow the literal chain.
/// assert_eq!(err.to_string(), "loading profile: row missing from index");
/// assert!(!details(Some(&err)).contains("key not found"));
/// ```
///
/// With a `None` cause the underlying error's own resolved cause carries
/// over unchanged; unlike [`note`], `because` never masks.
#[must_use]
#[track_caller]
#[inline]
pub fn because(
    err: Option<SharedError>,
    cause_override: Option<SharedError>,
    message: impl Into<String>,
) -> Option<SharedError> {
    match (err, cause_override) {
        (None, None) => None,
        (Some(err), cause_override) => Some(because_on(err, cause_override, message.into())),
        (None, Some(cause_override)) => {
            let mut link = Annotation::from_parts(message, None, Some(cause_override));
            link.set_location();
            Some(link.into_shared())
        }
    }
}

#[track_caller]
pub(crate) fn because_on(
    err: SharedError,
    cause_override: Option<SharedError>,
    message: String,
) -> SharedError {
    let attributed = match cause_override {
        Some(cause_override) => cause_override,
        None => cause(&err),
    };
    let mut link = Annotation::from_parts(message, Some(err), Some(attributed));
    link.set_location();
    link.into_shared()
}

/// Build a predicate that matches exactly the given error, by handle
/// identity.
///
/// Two handles are the same error only if they share an allocation; value
/// equality plays no part. The returned predicate is the usual argument to
/// [`note`]'s `should_preserve_cause`.
#[must_use]
pub fn is(target: &SharedError) -> impl Fn(&SharedError) -> bool + Send + Sync + 'static {
    let target = SharedError::clone(target);
    move |err| core::ptr::addr_eq(Arc::as_ptr(err), Arc::as_ptr(&target))
}
