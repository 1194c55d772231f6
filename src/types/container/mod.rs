//! The chained, stamped error value.
//!
//! A [`Container`] carries a [`Severity`], a message, an optional description,
//! an ordered list of [`Annotation`]s, an optional [`Cause`] and the
//! [`StampMetadata`] recorded by its first stamp. Containers are built once with
//! the builder methods below and are immutable afterwards, apart from the
//! one-time stamping step.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{Annotation, Container, Severity};
//!
//! let io = std::io::Error::other("no space left on device");
//! let err = Container::new(Severity::WARN | Severity::ERROR, "disk full")
//!     .annotate(Annotation::quoted("path", "/var/log"))
//!     .with_description("the log volume is mounted read-write")
//!     .caused_by(io);
//!
//! assert_eq!(err.message(), "disk full");
//! assert!(err.unwrap_cause().is_some());
//! ```
use core::error::Error;
use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::stamp::{StackFrames, StampMetadata, StampPolicy};
use crate::types::{Annotation, ErrorVec, Severity};

mod chain;
mod traits;

pub use chain::Links;

/// Shared native error held as a cause.
pub type NativeError = Arc<dyn Error + Send + Sync + 'static>;

/// The wrapped cause of a container: either a native error or another container.
#[derive(Clone)]
pub enum Cause {
    /// Any error that is not a [`Container`].
    Native(NativeError),
    /// The next container link of the chain.
    Container(Box<Container>),
}

impl Cause {
    /// Wraps `error`, keeping containers as container links.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps a boxed error, keeping containers as container links.
    ///
    /// A `Box<Container>` or `Arc<Container>` is unwrapped into a container
    /// link as well.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        let error = match error.downcast::<Container>() {
            Ok(container) => return Self::Container(container),
            Err(error) => error,
        };
        let error = match error.downcast::<Box<Container>>() {
            Ok(boxed) => return Self::Container(*boxed),
            Err(error) => error,
        };
        match error.downcast::<Arc<Container>>() {
            Ok(shared) => Self::Container(Box::new(Container::clone(&shared))),
            Err(native) => Self::Native(Arc::from(native)),
        }
    }

    /// Wraps an already shared error, keeping containers as container links.
    ///
    /// The shared allocation is kept for native errors, so identity
    /// comparisons through [`Container::is`] still see the same error.
    pub fn from_shared(error: NativeError) -> Self {
        if let Some(container) = error.downcast_ref::<Container>() {
            return Self::Container(Box::new(container.clone()));
        }
        if let Some(boxed) = error.downcast_ref::<Box<Container>>() {
            return Self::Container(Box::new(Container::clone(boxed)));
        }
        match error.downcast_ref::<Arc<Container>>() {
            Some(shared) => Self::Container(Box::new(Container::clone(shared))),
            None => Self::Native(error),
        }
    }

    /// Returns the cause as a plain error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self {
            Self::Native(native) => native.as_ref(),
            Self::Container(container) => &**container,
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => f.debug_tuple("Native").field(native).finish(),
            Self::Container(container) => f.debug_tuple("Container").field(container).finish(),
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => fmt::Display::fmt(native, f),
            Self::Container(container) => fmt::Display::fmt(container, f),
        }
    }
}

impl From<Container> for Cause {
    #[inline]
    fn from(container: Container) -> Self {
        Self::Container(Box::new(container))
    }
}

/// Chained error value with severity, annotations and stamp metadata.
#[must_use]
#[derive(Clone)]
pub struct Container {
    pub(crate) severity: Severity,
    pub(crate) message: Cow<'static, str>,
    pub(crate) description: Cow<'static, str>,
    pub(crate) cause: Option<Cause>,
    pub(crate) annotations: ErrorVec<Annotation>,
    pub(crate) stamp: StampMetadata,
}

impl Container {
    /// Creates an unstamped container without cause or annotations.
    #[inline]
    pub fn new<M>(severity: Severity, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            severity,
            message: message.into(),
            description: Cow::Borrowed(""),
            cause: None,
            annotations: ErrorVec::new(),
            stamp: StampMetadata::default(),
        }
    }

    /// Sets the longer description shown on a continuation line.
    #[inline]
    pub fn with_description<D>(mut self, description: D) -> Self
    where
        D: Into<Cow<'static, str>>,
    {
        self.description = description.into();
        self
    }

    /// Appends one annotation.
    #[inline]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Appends annotations in iteration order.
    #[inline]
    pub fn with_annotations<I>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        self.annotations.extend(annotations);
        self
    }

    /// Wraps `error` as this container's cause.
    ///
    /// A [`Container`] passed here becomes the next container link; anything
    /// else is kept as a native cause.
    #[inline]
    pub fn caused_by<E>(self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_cause(Cause::new(error))
    }

    /// Wraps a shared native error as this container's cause.
    #[inline]
    pub fn caused_by_shared(self, error: NativeError) -> Self {
        self.with_cause(Cause::from_shared(error))
    }

    /// Sets the cause.
    #[inline]
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Severity classification.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Short human message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Longer description; empty when not set.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Annotations in declaration order.
    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The directly wrapped cause.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Metadata recorded by the first stamp.
    #[inline]
    pub fn stamp_metadata(&self) -> &StampMetadata {
        &self.stamp
    }

    /// Whether this container has been stamped.
    #[inline]
    pub fn is_stamped(&self) -> bool {
        self.stamp.is_stamped()
    }

    /// Time of stamping, if recorded.
    #[inline]
    pub fn timestamp(&self) -> Option<&DateTime<Local>> {
        self.stamp.timestamp()
    }

    /// Frames captured on this link, if any.
    #[inline]
    pub fn frames(&self) -> Option<&StackFrames> {
        self.stamp.frames()
    }

    /// Stamps with the default policy, recording the stack from the caller.
    #[inline(never)]
    pub fn stamp(self) -> Self {
        crate::stamp::stamp_detail(self, 1)
    }

    /// Stamps with `policy`, recording the stack from the caller.
    #[inline(never)]
    pub fn stamp_with(self, policy: &StampPolicy) -> Self {
        policy.stamp_detail(self, 1)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("severity", &self.severity)
            .field("message", &self.message)
            .field("description", &self.description)
            .field("annotations", &self.annotations)
            .field("cause", &self.cause)
            .field("stamp", &self.stamp)
            .finish()
    }
}
