//! Lazily rendered key/value annotations.
//!
//! An [`Annotation`] pairs a key with a [`Render`] implementation. Nothing is
//! formatted when the annotation is created: the value is produced only when a
//! container is displayed or handed to a logger, which keeps the success path
//! and the "error constructed but discarded" path cheap.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{annotation, Annotation};
//!
//! let path = Annotation::quoted("path", "/var/log");
//! assert_eq!(path.to_string(), "path: '/var/log'");
//!
//! let retries = 3;
//! let lazy = annotation!("retries", "{} of {}", retries, 5);
//! assert_eq!(lazy.value(), "3 of 5");
//! ```
use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

use smallvec::SmallVec;

mod kinds;

pub use kinds::{
    BoolValue, LazyRender, QuotedString, SignedInt, SignedValue, TypeName, UnsignedInt,
    UnsignedValue,
};

/// Rendered fragments of a single annotation value.
///
/// Most values render to one to four fragments, which fit the inline storage.
pub type Fragments = SmallVec<[Cow<'static, str>; 4]>;

/// A deferred producer of an annotation's text.
///
/// Implementations must be idempotent: `render` may be called any number of
/// times and must produce the same fragments on every call.
pub trait Render: Send + Sync {
    /// Appends the value's fragments to `dest`.
    fn render(&self, dest: &mut Fragments);
}

/// A named, lazily rendered fact attached to a container.
#[derive(Clone)]
pub struct Annotation {
    key: Cow<'static, str>,
    render: Arc<dyn Render>,
}

impl Annotation {
    /// Creates an annotation from a key and any renderer.
    #[inline]
    pub fn new<K, R>(key: K, render: R) -> Self
    where
        K: Into<Cow<'static, str>>,
        R: Render + 'static,
    {
        Self { key: key.into(), render: Arc::new(render) }
    }

    /// Creates an annotation whose value is produced by `generator` at render time.
    #[inline]
    pub fn lazy<K, F>(key: K, generator: F) -> Self
    where
        K: Into<Cow<'static, str>>,
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::new(key, LazyRender::new(generator))
    }

    /// Quoted string value, rendered as `'value'`.
    #[inline]
    pub fn quoted<K, S>(key: K, value: S) -> Self
    where
        K: Into<Cow<'static, str>>,
        S: Into<Cow<'static, str>>,
    {
        Self::new(key, QuotedString(value.into()))
    }

    /// Signed integer value, rendered in decimal.
    #[inline]
    pub fn int<K, T>(key: K, value: T) -> Self
    where
        K: Into<Cow<'static, str>>,
        T: SignedInt,
    {
        Self::new(key, SignedValue(value.widen()))
    }

    /// Unsigned integer value, rendered in decimal followed by `(0x..)` hex.
    #[inline]
    pub fn uint<K, T>(key: K, value: T) -> Self
    where
        K: Into<Cow<'static, str>>,
        T: UnsignedInt,
    {
        Self::new(key, UnsignedValue(value.widen()))
    }

    /// Boolean value, rendered as `true` or `false`.
    #[inline]
    pub fn boolean<K>(key: K, value: bool) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        Self::new(key, BoolValue(value))
    }

    /// The type name of `value`.
    #[inline]
    pub fn type_of<K, T>(key: K, value: &T) -> Self
    where
        K: Into<Cow<'static, str>>,
        T: ?Sized,
    {
        Self::new(key, TypeName(core::any::type_name_of_val(value)))
    }

    /// Returns the annotation key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Renders the value into its fragments.
    pub fn fragments(&self) -> Fragments {
        let mut dest = Fragments::new();
        self.render.render(&mut dest);
        dest
    }

    /// Renders the value as a single string.
    pub fn value(&self) -> String {
        self.fragments().concat()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        f.write_str(": ")?;
        for fragment in self.fragments() {
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotation")
            .field("key", &self.key)
            .field("value", &self.value())
            .finish()
    }
}

/// Writes `(k1: v1, k2: v2)` for a non-empty annotation list.
pub(crate) fn write_annotation_list(
    f: &mut fmt::Formatter<'_>,
    annotations: &[Annotation],
) -> fmt::Result {
    if annotations.is_empty() {
        return Ok(());
    }

    f.write_str("(")?;
    for (i, annotation) in annotations.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(annotation, f)?;
    }
    f.write_str(")")
}
