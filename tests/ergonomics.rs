//! Integration tests for Result ergonomics, the formatted macros, and the
//! prelude.

use std::sync::Arc;

use errnote::prelude::*;
use errnote::{becausef, newf, notef};

fn same(a: &SharedError, b: &SharedError) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

// ============================================================================
// ResultExt
// ============================================================================

fn fail() -> Result<(), SharedError> {
    Err(new("base failure"))
}

#[test]
fn annotate_composes_and_tags_this_site() {
    let err = fail().annotate("running job").unwrap_err();

    assert_eq!(err.to_string(), "running job: base failure");
    let listing = details(Some(&err));
    assert!(
        listing.lines().next().unwrap().contains("ergonomics.rs:"),
        "Annotation should be tagged with the caller's site. Got:\n{}",
        listing
    );
}

#[test]
fn annotate_passes_ok_through() {
    let ok: Result<u32, SharedError> = Ok(7);
    assert_eq!(ok.annotate("unused").unwrap(), 7);
}

#[test]
fn located_adds_an_untexted_link() {
    let err = fail().located().unwrap_err();

    assert_eq!(err.to_string(), "base failure");
    assert_eq!(details(Some(&err)).lines().count(), 2);
}

#[test]
fn attribute_points_classification_at_a_sentinel() {
    let sentinel = new("not found");
    let err = fail()
        .attribute(sentinel.clone(), "looking up user")
        .unwrap_err();

    assert!(same(&cause(&err), &sentinel));
    assert_eq!(err.to_string(), "looking up user: base failure");
}

#[test]
fn annotate_if_masks_unknown_causes() {
    let sentinel = new("not found");
    let other = new("timeout");

    let attributed: Result<(), SharedError> =
        Err(because(Some(new("io")), Some(sentinel.clone()), "lookup").unwrap());
    let kept = attributed.annotate_if(&is(&sentinel), "retrying").unwrap_err();
    assert!(same(&cause(&kept), &sentinel));

    let attributed: Result<(), SharedError> =
        Err(because(Some(new("io")), Some(sentinel.clone()), "lookup").unwrap());
    let masked = attributed.annotate_if(&is(&other), "retrying").unwrap_err();
    assert!(same(&cause(&masked), &masked));
}

// ============================================================================
// Formatted macros
// ============================================================================

#[test]
fn newf_formats_and_tags_this_site() {
    let err = newf!("shard {} unreachable", 42);

    assert_eq!(err.to_string(), "shard 42 unreachable");
    assert!(
        details(Some(&err)).contains("ergonomics.rs:"),
        "Macro expansion site should be the recorded location"
    );
}

#[test]
fn notef_formats_before_annotating() {
    let err = notef!(Some(new("timeout")), None, "attempt {} of {}", 2, 3).unwrap();
    assert_eq!(err.to_string(), "attempt 2 of 3: timeout");
}

#[test]
fn notef_forwards_none() {
    assert!(notef!(None, None, "attempt {}", 1).is_none());
}

#[test]
fn becausef_formats_and_attributes() {
    let sentinel = new("not found");
    let err = becausef!(Some(new("io")), Some(sentinel.clone()), "fetching {}", "index").unwrap();

    assert!(same(&cause(&err), &sentinel));
    assert_eq!(err.to_string(), "fetching index: io");
}

// ============================================================================
// Prelude
// ============================================================================

#[test]
fn prelude_covers_chain_building_end_to_end() {
    let sentinel = new("not found");
    let err = because(Some(new("io")), Some(sentinel.clone()), "lookup").unwrap();
    let err = wrap(Some(err)).unwrap();
    let err = note(Some(err), Some(&is(&sentinel)), "handling request").unwrap();

    assert!(same(&cause(&err), &sentinel));
    assert_eq!(details(Some(&err)).lines().count(), 4);

    let mut link = Annotation::from_parts("manual", None, None);
    link.set_location();
    assert_eq!(link.into_shared().to_string(), "manual");
}
