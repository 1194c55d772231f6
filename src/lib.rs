//! Severity-classified, stamped error containers.
//!
//! A [`Container`] is an ordinary error value that also carries a
//! [`Severity`], a description, lazily rendered [`Annotation`]s and, once
//! stamped, the time and call stack of its original construction site. It can
//! be returned through `?` like any other error, or handed to a [`Logger`] that
//! prints a colorized report of the whole cause chain, root cause first.
//!
//! # Examples
//!
//! ## Building and returning a container
//!
//! ```
//! use error_stamp::{Annotation, Container, Severity};
//!
//! fn open(path: &'static str) -> Result<(), Container> {
//!     let io = std::io::Error::other("permission denied");
//!     Err(Container::new(Severity::ERROR, "cannot open")
//!         .annotate(Annotation::quoted("path", path))
//!         .caused_by(io)
//!         .stamp())
//! }
//!
//! let err = open("/etc/shadow").unwrap_err();
//! assert_eq!(err.to_string(), "cannot open(path: '/etc/shadow')permission denied");
//! assert!(err.frames().is_some());
//! ```
//!
//! ## Walking the chain
//!
//! ```
//! use error_stamp::{Container, Severity};
//!
//! let root = Container::new(Severity::ERROR, "connection refused");
//! let outer = Container::new(Severity::WARN, "sync failed").caused_by(root.clone());
//!
//! assert!(outer.is(&root));
//! let mut order = Vec::new();
//! outer.walk(|link, _| order.push(link.message().to_string()));
//! assert_eq!(order, ["connection refused", "sync failed"]);
//! ```
//!
//! ## Rendering a report
//!
//! ```
//! use error_stamp::{CommandLineLogger, Container, Logger, Severity, StampConfig, StampPolicy};
//!
//! let policy = StampPolicy::new(StampConfig { enable_timestamp: false, ..Default::default() });
//! let logger = CommandLineLogger::new(Vec::new()).with_color(false).with_policy(policy);
//!
//! logger.log(Container::new(Severity::WARN, "cache miss")).unwrap();
//! assert_eq!(String::from_utf8(logger.into_inner()).unwrap(), "[WARN] cache miss\n");
//! ```

/// Loggers writing container reports
pub mod logger;
/// Macros for annotations and stamped containers
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Chain walking and report presentation
pub mod render;
/// Stamp policies, stack capture and symbolication
pub mod stamp;
/// Extension traits for results
pub mod traits;
/// Severity, annotations and the container type
pub mod types;

pub use logger::{default_logger, CommandLineLogger, Logger};
#[cfg(feature = "tracing")]
pub use logger::TracingLogger;
pub use render::{render, RenderError};
pub use stamp::{
    default_policy, stamp, stamp_detail, DefaultSymbolizer, StackFrames, StampConfig,
    StampMetadata, StampPolicy, Symbolize, TimestampFormat,
};
pub use traits::ResultExt;
pub use types::{
    Annotation, BoxedContainerResult, Cause, Container, ContainerResult, LazyRender, Render,
    Severity,
};
