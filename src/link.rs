//! The `Annotation` chain link: the concrete error value built by the
//! constructors in [`annotate`](crate::annotate).
//!
//! An `Annotation` holds the message added at one annotation step, the
//! error it wraps, an optional cause override, and the call site that
//! produced it. All fields except the location are fixed at construction;
//! the location may be written exactly once, and only before the value is
//! shared, so published links are immutable and the underlying relation
//! can never cycle.

use alloc::string::String;
use alloc::sync::Arc;
use core::error::Error;
use core::fmt;
use core::fmt::Write as _;

use crate::capability::{Causer, ChainError, Located, SharedError, Wrapper};
use crate::location::SourceLocation;
use crate::report::write_chain;

/// One link in an error annotation chain.
///
/// Most code never names this type: the free constructors
/// [`new`](crate::new), [`wrap`](crate::wrap), [`note`](crate::note), and
/// [`because`](crate::because) build tagged links and hand back
/// [`SharedError`] handles. Construct an `Annotation` directly when you
/// need to assemble a link by hand and tag its location yourself:
///
/// ```rust
/// use errnote::Annotation;
///
/// let mut link = Annotation::from_parts("boot sequence failed", None, None);
/// assert!(link.location().is_none());
/// link.set_location();
/// assert!(link.location().is_some());
/// let err = link.into_shared();
/// assert_eq!(err.to_string(), "boot sequence failed");
/// ```
pub struct Annotation {
    message: String,
    underlying: Option<SharedError>,
    cause: Option<SharedError>,
    location: Option<SourceLocation>,
}

impl Annotation {
    /// Create a leaf link with the given message, tagged with the caller's
    /// call site.
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let mut link = Self::from_parts(message, None, None);
        link.set_location();
        link
    }

    /// Assemble a link from its parts, with no location tagged.
    ///
    /// `underlying` is the error this link wraps; `cause` is the override
    /// consulted by the resolver, or `None` to leave resolution at this
    /// link (see [`cause`](crate::cause) for how the two interact).
    #[must_use]
    pub fn from_parts(
        message: impl Into<String>,
        underlying: Option<SharedError>,
        cause: Option<SharedError>,
    ) -> Self {
        Self {
            message: message.into(),
            underlying,
            cause,
            location: None,
        }
    }

    /// Tag this link with the caller's call site.
    ///
    /// A link's location is written at most once: if one is already set,
    /// this is a no-op. The write happens through `&mut self`, so it is
    /// only possible before the link is shared; once converted into a
    /// [`SharedError`] the link is immutable.
    #[track_caller]
    #[inline]
    pub fn set_location(&mut self) {
        if self.location.is_none() {
            self.location = Some(SourceLocation::caller());
        }
    }

    /// The tagged call site, if any.
    #[must_use]
    #[inline]
    pub fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Publish this link as a shared chain handle.
    #[must_use]
    #[inline]
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}

// ============================================================================
// Display / Debug
// ============================================================================

impl fmt::Display for Annotation {
    /// Compose the conventional `outer: inner` display text.
    ///
    /// An empty message contributes no text and no separator; a leaf
    /// renders its message alone. A link with neither a message nor an
    /// underlying error falls back to its attributed cause, so a detached
    /// attribution still has display text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.underlying {
            Some(under) if self.message.is_empty() => write!(f, "{under}"),
            Some(under) => write!(f, "{}: {}", self.message, under),
            None => match &self.cause {
                Some(cause) if self.message.is_empty() => write!(f, "{cause}"),
                _ => f.write_str(&self.message),
            },
        }
    }
}

impl fmt::Debug for Annotation {
    /// Render the full chain, one link per line, outermost first, in the
    /// same shape [`details`](crate::details) produces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        write_chain(f, self)?;
        f.write_char(']')
    }
}

// ============================================================================
// Error
// ============================================================================

impl Error for Annotation {
    /// Surface the attributed cause to standard-library chain walkers,
    /// falling back to the underlying error when no cause is attributed.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.as_deref().or(self.underlying.as_deref()) {
            Some(err) => Some(err),
            None => None,
        }
    }
}

// ============================================================================
// Capabilities
// ============================================================================

impl Causer for Annotation {
    /// The cause override, if one was stored at construction.
    ///
    /// `None` when the cause was masked or never attributed; the resolver
    /// does not tell those apart.
    fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }
}

impl Wrapper for Annotation {
    fn message(&self) -> &str {
        &self.message
    }

    fn underlying(&self) -> Option<&SharedError> {
        self.underlying.as_ref()
    }
}

impl Located for Annotation {
    fn location(&self) -> Option<SourceLocation> {
        self.location
    }
}

impl ChainError for Annotation {
    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(self)
    }

    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(self)
    }

    fn as_located(&self) -> Option<&dyn Located> {
        Some(self)
    }
}
