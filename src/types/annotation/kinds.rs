//! Built-in annotation value renderers.
//!
//! Each renderer is an independent value type holding exactly what it needs to
//! format itself later. [`LazyRender`] wraps an arbitrary closure for values
//! that have no dedicated renderer.
use std::borrow::Cow;

use super::{Fragments, Render};

/// A renderer that defers string generation to a closure.
///
/// The closure runs every time the annotation is rendered, so it must not
/// depend on state that changes over the container's lifetime.
///
/// # Examples
///
/// ```
/// use error_stamp::{Annotation, LazyRender};
///
/// let annotation = Annotation::new("user_id", LazyRender::new(|| format!("{}", 42)));
/// assert_eq!(annotation.value(), "42");
/// ```
#[repr(transparent)]
pub struct LazyRender<F> {
    generator: F,
}

impl<F> LazyRender<F> {
    /// Creates a new `LazyRender` from a closure.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> Render for LazyRender<F>
where
    F: Fn() -> String + Send + Sync,
{
    #[inline]
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Owned((self.generator)()));
    }
}

/// String rendered between single quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedString(pub Cow<'static, str>);

impl Render for QuotedString {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Borrowed("'"));
        dest.push(self.0.clone());
        dest.push(Cow::Borrowed("'"));
    }
}

/// Signed integer rendered in decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedValue(pub i128);

impl Render for SignedValue {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Owned(self.0.to_string()));
    }
}

/// Unsigned integer rendered as `decimal (0xhex)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsignedValue(pub u128);

impl Render for UnsignedValue {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Owned(self.0.to_string()));
        dest.push(Cow::Borrowed(" (0x"));
        dest.push(Cow::Owned(format!("{:x}", self.0)));
        dest.push(Cow::Borrowed(")"));
    }
}

/// Boolean rendered as `true` / `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolValue(pub bool);

impl Render for BoolValue {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Borrowed(if self.0 { "true" } else { "false" }));
    }
}

/// A value's type name, as reported by [`core::any::type_name_of_val`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName(pub &'static str);

impl Render for TypeName {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Borrowed(self.0));
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Signed primitive integers accepted by [`Annotation::int`](super::Annotation::int).
pub trait SignedInt: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn widen(self) -> i128;
}

/// Unsigned primitive integers accepted by [`Annotation::uint`](super::Annotation::uint).
pub trait UnsignedInt: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn widen(self) -> u128;
}

macro_rules! impl_int_kind {
    ($trait:ident => $wide:ty: $($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl $trait for $ty {
                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }
            }
        )+
    };
}

impl_int_kind!(SignedInt => i128: i8, i16, i32, i64, i128, isize);
impl_int_kind!(UnsignedInt => u128: u8, u16, u32, u64, u128, usize);
