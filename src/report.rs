//! Diagnosis over finished chains: the cause resolver and the details
//! formatter.
//!
//! Both operations walk the chain through the capability queries on
//! [`ChainError`], testing support at every step; neither mutates
//! anything, so both are safe to call repeatedly and concurrently on
//! shared handles.

use alloc::string::String;
use core::fmt;

use crate::capability::{ChainError, SharedError};

/// Resolve the error a chain attributes as its root cause.
///
/// Starting at `err`: while the current error supports
/// [`Causer`](crate::Causer) and reports a cause, follow it. The walk
/// stops, returning the *current* error (never "nothing"), as soon as the
/// capability is absent or reports `None`. A masked cause is therefore
/// indistinguishable from no cause at all; that merging is deliberate.
///
/// The result is the value to classify against, typically with
/// [`is`](crate::is):
///
/// ```rust
/// use errnote::{cause, is, new, note};
///
/// let root = new("quota exceeded");
/// let err = note(Some(root.clone()), None, "uploading snapshot").unwrap();
/// assert!(is(&root)(&cause(&err)));
///
/// // A leaf resolves to itself.
/// assert!(is(&root)(&cause(&root)));
/// ```
#[must_use]
pub fn cause(err: &SharedError) -> SharedError {
    let mut current = err;
    loop {
        let Some(causer) = current.as_causer() else {
            break;
        };
        match causer.cause() {
            Some(next) => current = next,
            None => break,
        }
    }
    SharedError::clone(current)
}

/// Render every annotation in a chain, one line per link, outermost first.
///
/// Each line is `{file:line: message}` when the link exposes a non-empty
/// location, `{message}` otherwise; an untexted link still shows its site
/// as `{file:line: }`. Traversal follows the
/// [`Wrapper`](crate::Wrapper) capability; the first error without it is
/// rendered as its full display text and ends the listing. `None` renders
/// as `[]`.
///
/// ```rust
/// use errnote::{details, new, note};
///
/// let err = note(Some(new("some error")), None, "annotate1").unwrap();
/// let listing = details(Some(&err));
/// let lines: Vec<&str> = listing.lines().collect();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].contains("annotate1"));
/// assert!(lines[1].contains("some error"));
/// ```
///
/// # Panics
///
/// Panics if the underlying relation cycles, whether a
/// [`Wrapper`](crate::Wrapper) returns itself or a longer loop of custom
/// wrappers leads back to an earlier link. Chains built by this crate's
/// constructors are acyclic by construction; a cyclic wrapper is a
/// programmer error in a custom capability implementation, not a
/// recoverable condition.
#[must_use]
pub fn details(err: Option<&SharedError>) -> String {
    match err {
        None => String::from("[]"),
        Some(err) => alloc::format!("[{}]", ChainLines(&**err)),
    }
}

struct ChainLines<'a>(&'a dyn ChainError);

impl fmt::Display for ChainLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.0)
    }
}

/// Shared walker behind [`details`] and `Annotation`'s `Debug`.
///
/// Cycle detection is Brent's: `checkpoint` teleports to the cursor at
/// doubling intervals, so any loop in the underlying relation meets it
/// within one lap.
pub(crate) fn write_chain<W: fmt::Write>(out: &mut W, head: &dyn ChainError) -> fmt::Result {
    let mut current = head;
    let mut checkpoint = head;
    let mut stride = 1usize;
    let mut taken = 0usize;
    loop {
        out.write_char('{')?;
        if let Some(located) = current.as_located() {
            if let Some(loc) = located.location() {
                write!(out, "{loc}: ")?;
            }
        }
        let Some(wrapper) = current.as_wrapper() else {
            // Not a wrapper: its full display text is the innermost line.
            write!(out, "{current}")?;
            out.write_char('}')?;
            return Ok(());
        };
        out.write_str(wrapper.message())?;
        out.write_char('}')?;
        let Some(next) = wrapper.underlying() else {
            return Ok(());
        };
        let next: &dyn ChainError = &**next;
        if core::ptr::addr_eq(next as *const dyn ChainError, current as *const dyn ChainError)
            || core::ptr::addr_eq(next as *const dyn ChainError, checkpoint as *const dyn ChainError)
        {
            panic!("inconsistent Wrapper implementation: underlying chain cycles back on itself");
        }
        taken += 1;
        if taken == stride {
            checkpoint = next;
            stride *= 2;
            taken = 0;
        }
        out.write_char('\n')?;
        current = next;
    }
}
