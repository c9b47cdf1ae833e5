//! Convenient re-exports for common usage.
//!
//! ## Usage
//!
//! ```rust
//! use errnote::prelude::*;
//!
//! fn inner() -> Result<(), SharedError> {
//!     Err(new("disk full"))
//! }
//!
//! fn outer() -> Result<(), SharedError> {
//!     inner().annotate("writing journal")
//! }
//!
//! let err = outer().unwrap_err();
//! assert_eq!(err.to_string(), "writing journal: disk full");
//! ```

pub use crate::Annotation;
pub use crate::ResultExt;
pub use crate::SharedError;
pub use crate::{because, new, note, wrap};
pub use crate::{cause, details, is};
