//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_stamp::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`annotation!`], [`stamped!`]
//! - **Types**: [`Container`], [`Annotation`], [`Severity`], [`StampPolicy`]
//! - **Traits**: [`Logger`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_stamp::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, Container> {
//!     let owned = raw.to_string();
//!     raw.parse::<u16>().ctx_with(|| {
//!         Container::new(Severity::ERROR, "invalid port").annotate(annotation!("raw", "{:?}", owned))
//!     })
//! }
//!
//! assert!(parse_port("http").is_err());
//! ```

// Macros
pub use crate::{annotation, stamped};

// Core types
pub use crate::stamp::StampPolicy;
pub use crate::types::{Annotation, Container, Severity};

// Traits
pub use crate::logger::Logger;
pub use crate::traits::ResultExt;
