//! Extension trait for wrapping `Result` errors into stamped containers.
//!
//! This module provides [`ResultExt`], which turns any error into the cause of
//! a new [`Container`] and stamps it at the call site, without verbose
//! `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{ResultExt, Severity};
//!
//! fn load_config() -> Result<String, error_stamp::Container> {
//!     std::fs::read_to_string("config.toml").ctx(Severity::ERROR, "loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is_stamped());
//! assert!(err.find_cause::<std::io::Error>().is_some());
//! ```
use core::error::Error;
use std::borrow::Cow;

use crate::types::Container;

/// Extension trait for wrapping errors of `Result` types into containers.
///
/// The container is stamped with the default policy at the caller of these
/// methods, so a captured stack starts where the error was wrapped. Wrapping a
/// `Result<T, Container>` makes the existing container the next link of the
/// chain; its own stamp is kept.
///
/// # Examples
///
/// ## Lazy container construction
///
/// ```
/// use error_stamp::{Annotation, Container, ResultExt, Severity};
///
/// fn fetch(user_id: u64) -> Result<(), Container> {
///     let result: Result<(), std::io::Error> = Err(std::io::Error::other("timed out"));
///     result.ctx_with(|| {
///         Container::new(Severity::WARN, "fetching user")
///             .annotate(Annotation::uint("user_id", user_id))
///     })
/// }
///
/// assert_eq!(fetch(7).unwrap_err().to_string(), "fetching user(user_id: 7 (0x7))timed out");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in a new container with `severity` and `message`.
    fn ctx<M>(self, severity: crate::Severity, message: M) -> Result<T, Container>
    where
        M: Into<Cow<'static, str>>;

    /// Wraps the error in the container produced by `f`.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn ctx_with<F>(self, f: F) -> Result<T, Container>
    where
        F: FnOnce() -> Container;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline(never)]
    fn ctx<M>(self, severity: crate::Severity, message: M) -> Result<T, Container>
    where
        M: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let container = Container::new(severity, message).caused_by(err);
                Err(crate::stamp::stamp_detail(container, 1))
            },
        }
    }

    #[inline(never)]
    fn ctx_with<F>(self, f: F) -> Result<T, Container>
    where
        F: FnOnce() -> Container,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::stamp::stamp_detail(f().caused_by(err), 1)),
        }
    }
}
