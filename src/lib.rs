//! # errnote - Error annotation chains with cause attribution
//!
//! Wrap a low-level error with a message and a call site (and, when it
//! matters, attribute it to a *different* root cause) while keeping the
//! original error inspectable. Diagnostic code later unwinds the chain
//! into one line per annotation:
//!
//! ```text
//! [{src/api.rs:88: refreshing profile}
//! {src/db.rs:41: loading row}
//! {connection refused}]
//! ```
//!
//! ## Try It Now
//!
//! Build chains bottom-up with [`new`], [`note`], and the
//! [`ResultExt`] methods; every link records its construction site
//! automatically via `#[track_caller]`:
//!
//! ```rust
//! use errnote::{ResultExt, SharedError, details, new};
//!
//! fn load_row() -> Result<(), SharedError> {
//!     Err(new("connection refused"))
//! }
//!
//! fn refresh_profile() -> Result<(), SharedError> {
//!     load_row().annotate("loading row")
//! }
//!
//! let err = refresh_profile().unwrap_err();
//! assert_eq!(err.to_string(), "loading row: connection refused");
//! assert_eq!(details(Some(&err)).lines().count(), 2);
//! ```
//!
//! ## Cause vs. underlying
//!
//! Every link wraps an **underlying** error, which drives display text and
//! the [`details`] listing. Independently, a link may attribute a
//! **cause**: the error callers should classify against, which
//! [`because`] can point at a domain sentinel even when the literal chain
//! says something lower-level:
//!
//! ```rust
//! use errnote::{because, cause, is, new};
//!
//! let not_found = new("key not found");           // domain sentinel
//! let low = new("row missing from index");        // what actually happened
//! let err = because(Some(low), Some(not_found.clone()), "loading profile").unwrap();
//!
//! assert!(is(&not_found)(&cause(&err)));          // classify against the sentinel
//! assert_eq!(err.to_string(), "loading profile: row missing from index");
//! ```
//!
//! [`note`] re-annotates while deciding whether the cause survives: pass
//! `None` to preserve it, or a predicate (usually built with [`is`]) to
//! keep only known sentinels and mask everything else.
//!
//! ## Which constructor?
//!
//! | Constructor | Message | Cause handling |
//! |-------------|---------|----------------|
//! | [`new`] | yours | none (leaf) |
//! | [`wrap`] | empty | none (pure location tag) |
//! | [`note`] | yours | preserved, or masked by predicate |
//! | [`because`] | yours | explicitly attributed |
//!
//! All of them tag the caller's file and line; the formatted variants
//! [`newf!`], [`notef!`], and [`becausef!`] interpolate first and then
//! call the same constructors.
//!
//! ## Custom error types
//!
//! Participation is per capability, not per base type: implement
//! [`Causer`], [`Wrapper`], and/or [`Located`], and surface them through
//! [`ChainError`]'s query methods. [`cause`] and [`details`] test for
//! each capability at every traversal step, so a foreign type can support
//! any subset. Plain errors enter a chain through [`opaque`].
//!
//! ## Design Notes
//!
//! - Links are immutable after construction; the one-time location write
//!   happens through `&mut` before the link becomes a [`SharedError`], so
//!   shared chains are safe across threads and acyclic by construction.
//! - "Same error" means same allocation: [`is`] and cause attribution
//!   compare `Arc` identity, never value equality.
//! - A masked cause and an absent cause are indistinguishable to
//!   [`cause`]. That merging is deliberate: masking must not be
//!   detectable downstream.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod annotate;
mod capability;
mod ext;
mod link;
mod location;
pub mod prelude;
mod report;

pub use annotate::{CausePredicate, because, is, new, note, wrap};
pub use capability::{Causer, ChainError, Located, SharedError, Wrapper, opaque};
pub use ext::ResultExt;
pub use link::Annotation;
pub use location::SourceLocation;
pub use report::{cause, details};

#[doc(hidden)]
pub use alloc::format as __format;

/// Like [`new`], with a format string.
///
/// ```rust
/// let err = errnote::newf!("shard {} unreachable", 7);
/// assert_eq!(err.to_string(), "shard 7 unreachable");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new($crate::__format!($($arg)*))
    };
}

/// Like [`note`], with a format string.
///
/// ```rust
/// use errnote::{new, notef};
///
/// let err = notef!(Some(new("timeout")), None, "attempt {}", 3).unwrap();
/// assert_eq!(err.to_string(), "attempt 3: timeout");
/// ```
#[macro_export]
macro_rules! notef {
    ($err:expr, $pred:expr, $($arg:tt)*) => {
        $crate::note($err, $pred, $crate::__format!($($arg)*))
    };
}

/// Like [`because`], with a format string.
///
/// ```rust
/// use errnote::{becausef, cause, is, new};
///
/// let sentinel = new("not found");
/// let err = becausef!(Some(new("io error")), Some(sentinel.clone()), "fetching {}", "x").unwrap();
/// assert!(is(&sentinel)(&cause(&err)));
/// assert_eq!(err.to_string(), "fetching x: io error");
/// ```
#[macro_export]
macro_rules! becausef {
    ($err:expr, $cause:expr, $($arg:tt)*) => {
        $crate::because($err, $cause, $crate::__format!($($arg)*))
    };
}
