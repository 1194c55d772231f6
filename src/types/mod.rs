//! Error types and utilities.
//!
//! This module holds the value types of the crate: [`Severity`],
//! [`Annotation`] and the chained [`Container`].
//!
//! # Examples
//!
//! ```
//! use error_stamp::{Annotation, Container, Severity};
//!
//! let err = Container::new(Severity::ERROR, "query failed")
//!     .annotate(Annotation::uint("rows", 0u32))
//!     .annotate(Annotation::boolean("retried", true));
//!
//! assert_eq!(err.to_string(), "query failed(rows: 0 (0x0), retried: true)");
//! ```
use smallvec::SmallVec;

pub mod annotation;
pub mod container;
pub mod severity;

pub use annotation::*;
pub use container::*;
pub use severity::*;

/// SmallVec-backed collection used for a container's annotations.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in common cases where only a few annotations are attached.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with a [`Container`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ContainerResult<T> = Result<T, Container>;

/// Result alias with a boxed [`Container`] for reduced stack size.
pub type BoxedContainerResult<T> = Result<T, Box<Container>>;
