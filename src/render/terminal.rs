//! Terminal presenter with optional ANSI colors.
use std::io;

use super::{LinkReport, Presenter, RenderError};
use crate::types::Severity;

/// ANSI color codes used by the terminal presenter.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Fixed severity to color mapping.
fn severity_color(level: Severity) -> &'static str {
    if level == Severity::DEBUG {
        colors::BLUE
    } else if level == Severity::INFO {
        colors::GREEN
    } else if level == Severity::FIXED {
        colors::CYAN
    } else if level == Severity::WARN {
        colors::YELLOW
    } else if level == Severity::ERROR {
        colors::MAGENTA
    } else {
        colors::RED
    }
}

/// Presenter writing one line per link, a description continuation line and
/// a trailing `stacktrace:` block.
///
/// ```text
/// 2024-05-01T12:30:00+02:00 [WARN|ERROR] disk full (path: '/var/log'): no space left
///    description: the log volume is mounted read-write
/// stacktrace:
///   src/main.rs:12 main
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPresenter {
    color: bool,
}

impl TerminalPresenter {
    /// Creates a presenter; `color` enables ANSI escape sequences.
    #[inline]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Presenter without colors.
    #[inline]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Whether ANSI colors are written.
    #[inline]
    pub const fn color(&self) -> bool {
        self.color
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Best-effort writer remembering the first failure.
struct Painter<'a> {
    sink: &'a mut dyn io::Write,
    color: bool,
    error: Option<io::Error>,
}

impl<'a> Painter<'a> {
    fn new(sink: &'a mut dyn io::Write, color: bool) -> Self {
        Self { sink, color, error: None }
    }

    fn paint(&mut self, color: &str, parts: &[&str]) {
        if let Err(err) = self.try_paint(color, parts) {
            self.error.get_or_insert(err);
        }
    }

    fn try_paint(&mut self, color: &str, parts: &[&str]) -> io::Result<()> {
        if self.color {
            self.sink.write_all(color.as_bytes())?;
        }
        for part in parts {
            self.sink.write_all(part.as_bytes())?;
        }
        if self.color {
            self.sink.write_all(colors::RESET.as_bytes())?;
        }
        Ok(())
    }

    fn finish(self) -> Result<(), RenderError> {
        match self.error {
            Some(err) => Err(RenderError::Write(err)),
            None => Ok(()),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn present_link(
        &self,
        sink: &mut dyn io::Write,
        link: &LinkReport<'_>,
    ) -> Result<(), RenderError> {
        let mut painter = Painter::new(sink, self.color);

        if let Some(timestamp) = &link.timestamp {
            painter.paint(colors::CYAN, &[timestamp.as_str(), " "]);
        }

        let mut message_color = colors::RESET;
        painter.paint(colors::RESET, &["["]);
        if link.severity.is_empty() {
            painter.paint(colors::RESET, &[Severity::UNKNOWN_LABEL]);
        }
        for (i, (level, label)) in link.severity.levels().enumerate() {
            if i > 0 {
                painter.paint(colors::RESET, &["|"]);
            }
            message_color = severity_color(level);
            painter.paint(message_color, &[label]);
        }
        painter.paint(colors::RESET, &["] "]);
        painter.paint(message_color, &[link.message]);

        if !link.annotations.is_empty() {
            painter.paint(colors::RESET, &[" ("]);
            for (i, (key, value)) in link.annotations.iter().enumerate() {
                if i > 0 {
                    painter.paint(colors::RESET, &[", "]);
                }
                painter.paint(colors::CYAN, &[*key]);
                painter.paint(colors::RESET, &[": "]);
                painter.paint(message_color, &[value.as_str()]);
            }
            painter.paint(colors::RESET, &[")"]);
        }

        if let Some(wrapped) = &link.wrapped {
            painter.paint(colors::RESET, &[": "]);
            painter.paint(colors::MAGENTA, &[wrapped.as_str()]);
        }

        painter.paint(colors::RESET, &["\n"]);

        if let Some(description) = link.description {
            painter.paint(
                colors::RESET,
                &["   description: ", description.trim_end_matches('\n'), "\n"],
            );
        }

        painter.finish()
    }

    fn present_stack(
        &self,
        sink: &mut dyn io::Write,
        frames: &[String],
    ) -> Result<(), RenderError> {
        let mut painter = Painter::new(sink, self.color);

        painter.paint(colors::RESET, &["stacktrace:\n"]);
        for frame in frames {
            painter.paint(colors::RESET, &["  ", frame.as_str(), "\n"]);
        }

        painter.finish()
    }
}
