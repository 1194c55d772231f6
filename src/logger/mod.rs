//! Loggers that stamp containers and write their chain reports.
//!
//! A container can always be returned as a plain error. When it should be
//! reported instead, a [`Logger`] stamps it with the logger's own policy (a
//! no-op when it is already stamped) and renders the whole chain.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{CommandLineLogger, Container, Logger, Severity, StampConfig, StampPolicy};
//!
//! let policy = StampPolicy::new(StampConfig { enable_timestamp: false, ..Default::default() });
//! let logger = CommandLineLogger::new(Vec::new()).with_color(false).with_policy(policy);
//!
//! logger.message(Severity::INFO, None, "service started".into(), &[]).unwrap();
//! let out = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(out, "[INFO] service started\n");
//! ```
use std::borrow::Cow;
use std::io::{self, Stdout};
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::render::{render, RenderError, TerminalPresenter};
use crate::stamp::StampPolicy;
use crate::types::{Annotation, Cause, Container, Severity};

#[cfg(feature = "tracing")]
mod tracing_ext;

#[cfg(feature = "tracing")]
pub use tracing_ext::TracingLogger;

/// Destination for container reports.
pub trait Logger {
    /// Policy used to stamp containers that reach the logger unstamped.
    fn policy(&self) -> &StampPolicy;

    /// Stamps `container` with [`Logger::policy`] if needed and reports its chain.
    fn log(&self, container: Container) -> Result<(), RenderError>;

    /// Builds a container from the parts, stamps it at the caller and logs it.
    #[inline(never)]
    fn message(
        &self,
        severity: Severity,
        cause: Option<Cause>,
        message: Cow<'static, str>,
        annotations: &[Annotation],
    ) -> Result<(), RenderError> {
        let mut container =
            Container::new(severity, message).with_annotations(annotations.iter().cloned());
        if let Some(cause) = cause {
            container = container.with_cause(cause);
        }
        self.log(self.policy().stamp_detail(container, 1))
    }
}

/// Logger writing colored (or plain) reports to an [`io::Write`] sink.
///
/// Writes are serialized, so one logger may be shared across threads when its
/// sink is `Send`.
pub struct CommandLineLogger<W> {
    presenter: TerminalPresenter,
    sink: Mutex<W>,
    policy: StampPolicy,
    filter: Option<Severity>,
}

impl CommandLineLogger<Stdout> {
    /// Colored logger on standard output with the default policy.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> CommandLineLogger<W> {
    /// Colored logger on `sink` with the default policy.
    pub fn new(sink: W) -> Self {
        Self {
            presenter: TerminalPresenter::new(true),
            sink: Mutex::new(sink),
            policy: crate::stamp::default_policy().clone(),
            filter: None,
        }
    }

    /// Enables or disables ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.presenter = TerminalPresenter::new(color);
        self
    }

    /// Replaces the stamping policy.
    pub fn with_policy(mut self, policy: StampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Only reports containers whose severity intersects `severities`, for
    /// example [`Severity::LOGGING`].
    pub fn with_filter(mut self, severities: Severity) -> Self {
        self.filter = Some(severities);
        self
    }

    /// Whether ANSI colors are enabled.
    #[inline]
    pub fn color(&self) -> bool {
        self.presenter.color()
    }

    /// Whether a container of `severity` passes the filter.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.filter.map_or(true, |filter| severity.intersects(filter))
    }

    /// Consumes the logger, returning its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: io::Write> Logger for CommandLineLogger<W> {
    #[inline]
    fn policy(&self) -> &StampPolicy {
        &self.policy
    }

    #[inline(never)]
    fn log(&self, container: Container) -> Result<(), RenderError> {
        let container = self.policy.stamp_detail(container, 1);
        if !self.enabled(container.severity()) {
            return Ok(());
        }

        let mut sink = self.sink.lock();
        render(&container, &self.presenter, &mut *sink)
    }
}

/// The shared default logger: colored, on standard output, default policy.
pub fn default_logger() -> &'static CommandLineLogger<Stdout> {
    static DEFAULT: OnceLock<CommandLineLogger<Stdout>> = OnceLock::new();
    DEFAULT.get_or_init(CommandLineLogger::stdout)
}
