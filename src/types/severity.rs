//! Severity classification for error containers.
//!
//! A [`Severity`] is a bitmask, so a single container may carry more than one
//! level at once (for example `WARN | ERROR`). Labels are always produced in
//! declaration order, which keeps rendered output stable.
//!
//! # Examples
//!
//! ```
//! use error_stamp::Severity;
//!
//! let severity = Severity::WARN | Severity::ERROR;
//! assert_eq!(severity.to_string(), "WARN|ERROR");
//! assert!(severity.intersects(Severity::STACK_TRACE));
//! ```
use core::fmt;

bitflags::bitflags! {
    /// Bitmask over the fixed set of severity levels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Severity: u8 {
        const DEBUG = 1 << 0;
        const INFO = 1 << 1;
        const FIXED = 1 << 2;
        const WARN = 1 << 3;
        const ERROR = 1 << 4;
        const FATAL = 1 << 5;
    }
}

impl Severity {
    /// Severities the default stamp policy captures a call stack for.
    pub const STACK_TRACE: Self =
        Self::from_bits_truncate(Self::FIXED.bits() | Self::ERROR.bits() | Self::FATAL.bits());

    /// Severities worth logging when a logger filter is enabled.
    pub const LOGGING: Self =
        Self::from_bits_truncate(Self::WARN.bits() | Self::ERROR.bits() | Self::FATAL.bits());

    /// Label used when no level bit is set.
    pub const UNKNOWN_LABEL: &'static str = "UNKNOWN";

    const LABELS: [(Self, &'static str); 6] = [
        (Self::DEBUG, "DEBUG"),
        (Self::INFO, "INFO"),
        (Self::FIXED, "FIXED"),
        (Self::WARN, "WARN"),
        (Self::ERROR, "ERROR"),
        (Self::FATAL, "FATAL"),
    ];

    /// Iterates over the single-bit levels set in `self`, with their labels,
    /// in declaration order.
    pub fn levels(self) -> impl Iterator<Item = (Severity, &'static str)> {
        Self::LABELS
            .into_iter()
            .filter(move |(level, _)| self.contains(*level))
    }

    /// Iterates over the labels set in `self`, in declaration order.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        self.levels().map(|(_, label)| label)
    }

    /// Returns the most severe single level set, if any.
    #[inline]
    pub fn highest(self) -> Option<Severity> {
        self.levels().last().map(|(level, _)| level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(Self::UNKNOWN_LABEL);
        }

        for (i, label) in self.labels().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}
