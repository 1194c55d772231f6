//! Ergonomic macros for building annotations and containers.
//!
//! - [`macro@crate::annotation`] - Creates an [`Annotation`](crate::Annotation)
//!   whose value is formatted lazily, only when the container is rendered.
//! - [`macro@crate::stamped`] - Builds a [`Container`](crate::Container) with a
//!   formatted message and stamps it at the invocation site.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{annotation, stamped, Severity};
//!
//! let attempt = 3;
//! let err = stamped!(Severity::WARN, "request failed after {} attempts", attempt;
//!     annotation!("endpoint", "/v1/{}", "users"),
//! );
//!
//! assert_eq!(err.message(), "request failed after 3 attempts");
//! assert_eq!(err.annotations()[0].value(), "/v1/users");
//! assert!(err.is_stamped());
//! ```

/// Creates an annotation whose value is formatted lazily.
///
/// Accepts a key followed by the same arguments as the standard `format!`
/// macro. Captured values are moved into the render closure, so they must be
/// `Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use error_stamp::annotation;
///
/// let user_id = 42;
/// let annotation = annotation!("user", "#{}", user_id);
/// assert_eq!(annotation.to_string(), "user: #42");
/// ```
#[macro_export]
macro_rules! annotation {
    ($key:expr, $($arg:tt)+) => {
        $crate::Annotation::lazy($key, move || format!($($arg)+))
    };
}

/// Builds a container with a formatted message, optional annotations after a
/// `;`, and stamps it with the default policy at the invocation site.
///
/// # Examples
///
/// ```
/// use error_stamp::{stamped, Annotation, Severity};
///
/// let err = stamped!(Severity::ERROR, "disk full"; Annotation::quoted("path", "/var/log"));
/// assert_eq!(err.to_string(), "disk full(path: '/var/log')");
/// ```
#[macro_export]
macro_rules! stamped {
    ($severity:expr, $fmt:literal $(, $arg:expr)* $(,)? $(; $($annotation:expr),* $(,)?)?) => {
        $crate::stamp::stamp_detail(
            $crate::Container::new($severity, format!($fmt $(, $arg)*))
                $($(.annotate($annotation))*)?,
            0,
        )
    };
}
