//! Chain walking and report rendering.
//!
//! [`ChainReport::collect`] walks a container chain innermost-first and turns
//! every link into a [`LinkReport`]: the display fields of that link, with
//! annotations already rendered. A [`Presenter`] then decides how those fields
//! are written to a sink; [`TerminalPresenter`] is the ANSI-colored default.
//!
//! # Examples
//!
//! ```
//! use error_stamp::render::{render, TerminalPresenter};
//! use error_stamp::{Annotation, Container, Severity, StampConfig, StampPolicy};
//!
//! let policy = StampPolicy::new(StampConfig { enable_timestamp: false, ..Default::default() });
//! let err = Container::new(Severity::WARN, "disk almost full")
//!     .annotate(Annotation::quoted("path", "/var/log"))
//!     .stamp_with(&policy);
//!
//! let mut out = Vec::new();
//! render(&err, &TerminalPresenter::plain(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "[WARN] disk almost full (path: '/var/log')\n");
//! ```
use std::io;

use crate::types::{Container, Severity};

mod terminal;

pub use terminal::{colors, TerminalPresenter};

/// Failure while writing a report to its sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The sink rejected a write.
    #[error("cannot write strings: {0}")]
    Write(#[from] io::Error),
}

/// Display fields of one container link.
#[derive(Debug, Clone)]
pub struct LinkReport<'a> {
    /// The link these fields were taken from.
    pub link: &'a Container,
    /// Stamp time rendered with the stamping policy's format.
    pub timestamp: Option<String>,
    /// Severity of the link.
    pub severity: Severity,
    /// The link's message.
    pub message: &'a str,
    /// Annotation keys with their rendered values, in declaration order.
    pub annotations: Vec<(&'a str, String)>,
    /// Non-empty description.
    pub description: Option<&'a str>,
    /// Text of the native error this link wraps directly.
    pub wrapped: Option<String>,
    /// Whether the report's stack trace was captured on this link.
    pub carries_stack: bool,
}

impl<'a> LinkReport<'a> {
    fn new(link: &'a Container, wrapped: Option<String>, carries_stack: bool) -> Self {
        let annotations = link
            .annotations()
            .iter()
            .map(|annotation| (annotation.key(), annotation.value()))
            .collect();
        let description = Some(link.description()).filter(|desc| !desc.is_empty());

        Self {
            link,
            timestamp: link.stamp_metadata().formatted_timestamp(),
            severity: link.severity(),
            message: link.message(),
            annotations,
            description,
            wrapped,
            carries_stack,
        }
    }
}

/// Presentation units of a whole chain, innermost link first.
#[derive(Debug, Clone)]
pub struct ChainReport<'a> {
    /// One entry per container link, root cause first.
    pub links: Vec<LinkReport<'a>>,
    /// Resolved frames of the innermost link that captured a stack.
    pub stack_trace: Vec<String>,
}

impl<'a> ChainReport<'a> {
    /// Walks `container`'s chain and collects its presentation units.
    pub fn collect(container: &'a Container) -> Self {
        let stack_link = container.stack_link();
        let mut links = Vec::with_capacity(container.depth());

        container.walk(|link, wrapped| {
            let carries_stack = stack_link.is_some_and(|stack| core::ptr::eq(stack, link));
            links.push((link, wrapped.map(|err| err.to_string()), carries_stack));
        });

        let links = links
            .into_iter()
            .map(|(link, wrapped, carries_stack)| LinkReport::new(link, wrapped, carries_stack))
            .collect();

        let mut stack_trace = Vec::new();
        container.stack_trace(&mut stack_trace);

        Self { links, stack_trace }
    }
}

/// Writes presentation units to a sink.
pub trait Presenter {
    /// Writes one link.
    fn present_link(
        &self,
        sink: &mut dyn io::Write,
        link: &LinkReport<'_>,
    ) -> Result<(), RenderError>;

    /// Writes the resolved stack trace; only called when it is non-empty.
    fn present_stack(
        &self,
        sink: &mut dyn io::Write,
        frames: &[String],
    ) -> Result<(), RenderError>;
}

/// Renders `container`'s chain through `presenter` into `sink`.
///
/// Writing is best-effort: every link and the stack trace are attempted even
/// after a failed write, and the first error is returned.
pub fn render<P, W>(container: &Container, presenter: &P, sink: &mut W) -> Result<(), RenderError>
where
    P: Presenter + ?Sized,
    W: io::Write + ?Sized,
{
    let report = ChainReport::collect(container);
    let mut first_error: Option<RenderError> = None;
    let mut sink = Sink(sink);

    for link in &report.links {
        if let Err(err) = presenter.present_link(&mut sink, link) {
            first_error.get_or_insert(err);
        }
    }

    if !report.stack_trace.is_empty() {
        if let Err(err) = presenter.present_stack(&mut sink, &report.stack_trace) {
            first_error.get_or_insert(err);
        }
    }

    if let Err(err) = io::Write::flush(&mut sink) {
        first_error.get_or_insert(err.into());
    }

    match first_error {
        None => Ok(()),
        Some(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                error = %err,
                message = container.message(),
                "failed to render error report"
            );
            Err(err)
        },
    }
}

/// Sized adapter so unsized sinks can be passed on as `&mut dyn Write`.
struct Sink<'a, W: ?Sized>(&'a mut W);

impl<W: io::Write + ?Sized> io::Write for Sink<'_, W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
