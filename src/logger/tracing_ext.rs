//! Tracing integration.
//!
//! [`TracingLogger`] forwards every link of a container chain as a `tracing`
//! event instead of writing text, so reports end up wherever the installed
//! subscriber sends them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-stamp = { version = "0.1", features = ["tracing"] }
//! ```
use tracing::Level;

use super::Logger;
use crate::render::{ChainReport, LinkReport, RenderError};
use crate::stamp::StampPolicy;
use crate::types::{Container, Severity};

/// Maps a severity mask to the event level of its most severe bit.
fn level_for(severity: Severity) -> Level {
    match severity.highest() {
        Some(level) if level == Severity::DEBUG => Level::DEBUG,
        Some(level) if level == Severity::INFO || level == Severity::FIXED => Level::INFO,
        Some(level) if level == Severity::WARN => Level::WARN,
        Some(_) => Level::ERROR,
        None => Level::TRACE,
    }
}

macro_rules! link_event {
    ($level:expr, $link:expr, $annotations:expr) => {
        tracing::event!(
            $level,
            severity = %$link.severity,
            annotations = %$annotations,
            description = $link.description,
            cause = $link.wrapped.as_deref(),
            timestamp = $link.timestamp.as_deref(),
            "{}",
            $link.message
        )
    };
}

fn emit(link: &LinkReport<'_>) {
    let annotations = link
        .annotations
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");

    let level = level_for(link.severity);
    if level == Level::ERROR {
        link_event!(Level::ERROR, link, annotations);
    } else if level == Level::WARN {
        link_event!(Level::WARN, link, annotations);
    } else if level == Level::INFO {
        link_event!(Level::INFO, link, annotations);
    } else if level == Level::DEBUG {
        link_event!(Level::DEBUG, link, annotations);
    } else {
        link_event!(Level::TRACE, link, annotations);
    }
}

/// Logger emitting one `tracing` event per container link, root cause first.
///
/// The resolved stack trace, when present, is emitted as a final `DEBUG`
/// event.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    policy: StampPolicy,
}

impl TracingLogger {
    /// Creates a logger stamping with `policy`.
    pub fn new(policy: StampPolicy) -> Self {
        Self { policy }
    }
}

impl Logger for TracingLogger {
    #[inline]
    fn policy(&self) -> &StampPolicy {
        &self.policy
    }

    #[inline(never)]
    fn log(&self, container: Container) -> Result<(), RenderError> {
        let container = self.policy.stamp_detail(container, 1);
        let report = ChainReport::collect(&container);

        for link in &report.links {
            emit(link);
        }

        if !report.stack_trace.is_empty() {
            tracing::debug!(stacktrace = %report.stack_trace.join("\n"), "{}", container.message());
        }

        Ok(())
    }
}
