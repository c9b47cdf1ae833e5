//! Integration tests for cause resolution across custom capability
//! implementations.

use std::fmt;
use std::sync::Arc;

use errnote::{Causer, ChainError, SharedError, because, cause, is, new, note, opaque};

/// Handle identity.
fn same(a: &SharedError, b: &SharedError) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

// ============================================================================
// Custom capability fixtures
// ============================================================================

/// An external error that redirects cause resolution to another error.
#[derive(Debug)]
struct Redirect {
    target: SharedError,
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redirect")
    }
}

impl std::error::Error for Redirect {}

impl Causer for Redirect {
    fn cause(&self) -> Option<&SharedError> {
        Some(&self.target)
    }
}

impl ChainError for Redirect {
    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(self)
    }
}

/// An external error that supports the capability but masks its cause.
#[derive(Debug)]
struct Muffled;

impl fmt::Display for Muffled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "muffled")
    }
}

impl std::error::Error for Muffled {}

impl Causer for Muffled {
    fn cause(&self) -> Option<&SharedError> {
        None
    }
}

impl ChainError for Muffled {
    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(self)
    }
}

/// An external error with no capabilities at all.
#[derive(Debug)]
struct Bare;

impl fmt::Display for Bare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bare")
    }
}

impl std::error::Error for Bare {}

impl ChainError for Bare {}

// ============================================================================
// Resolver walk
// ============================================================================

#[test]
fn resolver_follows_custom_causers_to_the_end() {
    let root = new("root");
    let hop: SharedError = Arc::new(Redirect {
        target: root.clone(),
    });
    let head: SharedError = Arc::new(Redirect { target: hop });

    assert!(
        same(&cause(&head), &root),
        "resolution should walk through every Causer hop"
    );
}

#[test]
fn resolver_stops_at_masking_causer() {
    let muffled: SharedError = Arc::new(Muffled);
    assert!(same(&cause(&muffled), &muffled));
}

#[test]
fn masking_and_absence_are_indistinguishable() {
    // One error masks its cause, the other never had the capability. The
    // resolver must treat both the same way: stop, return the error.
    let muffled: SharedError = Arc::new(Muffled);
    let bare: SharedError = Arc::new(Bare);

    assert!(same(&cause(&muffled), &muffled));
    assert!(same(&cause(&bare), &bare));
}

#[test]
fn resolver_walks_through_annotations_into_custom_causers() {
    let root = new("root");
    let hop: SharedError = Arc::new(Redirect {
        target: root.clone(),
    });
    let annotated = note(Some(hop), None, "after the redirect").unwrap();

    assert!(same(&cause(&annotated), &root));
}

// ============================================================================
// Attribution through annotation layers
// ============================================================================

#[test]
fn attribution_survives_repeated_annotation() {
    let sentinel = new("quota exceeded");
    let mut err = because(Some(new("disk write failed")), Some(sentinel.clone()), "flush").unwrap();
    for depth in 0..8 {
        err = note(Some(err), None, format!("layer {depth}")).unwrap();
    }
    assert!(same(&cause(&err), &sentinel));
}

#[test]
fn masking_cuts_attribution_at_that_layer() {
    let sentinel = new("quota exceeded");
    let err = because(Some(new("disk write failed")), Some(sentinel.clone()), "flush").unwrap();

    let masked = note(Some(err), Some(&|_: &SharedError| false), "redacted").unwrap();
    assert!(same(&cause(&masked), &masked));

    // Annotating the masked link further does not resurrect the sentinel.
    let outer = note(Some(masked.clone()), None, "request failed").unwrap();
    assert!(same(&cause(&outer), &masked));
}

#[test]
fn is_predicate_preserves_only_named_sentinels() {
    let not_found = new("not found");
    let timeout = new("timeout");

    let err = because(Some(new("io")), Some(not_found.clone()), "lookup").unwrap();

    let kept = note(Some(err.clone()), Some(&is(&not_found)), "retrying").unwrap();
    assert!(same(&cause(&kept), &not_found));

    let masked = note(Some(err), Some(&is(&timeout)), "retrying").unwrap();
    assert!(!same(&cause(&masked), &not_found));
    assert!(same(&cause(&masked), &masked));
}

// ============================================================================
// Foreign errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
#[error("checksum mismatch on block {block}")]
struct CorruptBlock {
    block: u64,
}

#[test]
fn opaque_foreign_error_is_its_own_cause() {
    let leaf = opaque(CorruptBlock { block: 12 });
    let err = note(Some(leaf.clone()), None, "verifying segment").unwrap();

    assert!(same(&cause(&err), &leaf));
    assert_eq!(
        err.to_string(),
        "verifying segment: checksum mismatch on block 12"
    );
}

#[test]
fn cause_is_idempotent_over_mixed_chains() {
    let root = new("root");
    let hop: SharedError = Arc::new(Redirect {
        target: root.clone(),
    });
    let err = note(Some(hop), None, "mixed").unwrap();

    let once = cause(&err);
    let twice = cause(&once);
    assert!(same(&once, &twice));
    assert!(same(&once, &root));
}
