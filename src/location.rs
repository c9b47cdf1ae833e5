//! Source locations attached to chain links.

use core::fmt;
use core::panic::Location;

/// A recorded call site: file and line.
///
/// Constructors capture this automatically through `#[track_caller]`; the
/// manual [`new`](SourceLocation::new) constructor exists so external
/// [`Located`](crate::Located) implementations can report positions that
/// did not come from the Rust call stack.
///
/// ```rust
/// let loc = errnote::SourceLocation::new("codegen/emit.rs", 41);
/// assert_eq!(loc.to_string(), "codegen/emit.rs:41");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Build a location from an explicit file and line.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the caller's call site.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// The source file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line within [`file`](SourceLocation::file), 1-based.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    #[inline]
    fn from(loc: &'static Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
