//! One-time capture of timestamp and call-stack metadata.
//!
//! A [`StampPolicy`] decides what gets recorded when a container is stamped:
//! a timestamp (optionally) and a raw call stack for stack-eligible severities.
//! Stamping is idempotent. The first stamp wins, so a container keeps the
//! context of its original construction site however many outer layers stamp
//! it again while it propagates.
//!
//! # Examples
//!
//! ```
//! use error_stamp::{Container, Severity, StampConfig, StampPolicy};
//!
//! let policy = StampPolicy::new(StampConfig {
//!     stack_trace: Severity::FATAL,
//!     ..StampConfig::default()
//! });
//!
//! let err = policy.stamp(Container::new(Severity::ERROR, "lookup failed"));
//! assert!(err.is_stamped());
//! assert!(err.frames().is_none());
//! ```
use core::fmt;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Local};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Container, Severity};

pub(crate) mod capture;
mod symbolize;

pub use capture::{StackFrames, MAX_FRAMES};
pub use symbolize::{function_name, DefaultSymbolizer, Symbolize};

/// How timestamps are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimestampFormat {
    /// RFC 3339 with second precision, e.g. `2024-05-01T12:30:00+02:00`.
    #[default]
    Rfc3339,
    /// A `chrono` strftime pattern.
    Custom(Cow<'static, str>),
}

impl TimestampFormat {
    /// Formats `timestamp`. An invalid custom pattern falls back to RFC 3339.
    pub fn format(&self, timestamp: &DateTime<Local>) -> String {
        let rfc3339 = || timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, false);

        match self {
            Self::Rfc3339 => rfc3339(),
            Self::Custom(pattern) => {
                let mut out = String::new();
                match write!(out, "{}", timestamp.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => rfc3339(),
                }
            },
        }
    }
}

/// Plain configuration part of a [`StampPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StampConfig {
    /// Record the time of stamping.
    pub enable_timestamp: bool,
    /// Rendering of recorded timestamps.
    pub timestamp_format: TimestampFormat,
    /// Severities a call stack is captured for.
    pub stack_trace: Severity,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            enable_timestamp: true,
            timestamp_format: TimestampFormat::Rfc3339,
            stack_trace: Severity::STACK_TRACE,
        }
    }
}

struct PolicyInner {
    config: StampConfig,
    symbolizer: Option<Arc<dyn Symbolize>>,
}

/// Configuration applied when stamping a container.
///
/// Cloning is cheap; clones share the same configuration, and every container
/// stamped by a policy keeps a handle to it for rendering.
#[derive(Clone)]
pub struct StampPolicy {
    inner: Arc<PolicyInner>,
}

impl StampPolicy {
    /// Creates a policy using the [`DefaultSymbolizer`].
    pub fn new(config: StampConfig) -> Self {
        let symbolizer: Arc<dyn Symbolize> = Arc::new(DefaultSymbolizer);
        Self { inner: Arc::new(PolicyInner { config, symbolizer: Some(symbolizer) }) }
    }

    /// Replaces the symbolization strategy.
    pub fn with_symbolizer<S>(self, symbolizer: S) -> Self
    where
        S: Symbolize + 'static,
    {
        let config = self.inner.config.clone();
        Self { inner: Arc::new(PolicyInner { config, symbolizer: Some(Arc::new(symbolizer)) }) }
    }

    /// Removes symbolization: frames are still captured but never resolved.
    pub fn without_symbolizer(self) -> Self {
        let config = self.inner.config.clone();
        Self { inner: Arc::new(PolicyInner { config, symbolizer: None }) }
    }

    /// Returns the plain configuration.
    #[inline]
    pub fn config(&self) -> &StampConfig {
        &self.inner.config
    }

    /// Whether two handles refer to the same policy.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether a container of `severity` gets a call stack under this policy.
    #[inline]
    pub fn captures_stack(&self, severity: Severity) -> bool {
        severity.intersects(self.inner.config.stack_trace)
    }

    /// Stamps `container`, recording the stack from this call's caller.
    #[inline(never)]
    pub fn stamp(&self, container: Container) -> Container {
        self.stamp_detail(container, 1)
    }

    /// Stamps `container`, skipping `skip` frames above the caller of this
    /// function when capturing the stack.
    ///
    /// An already stamped container is returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics when stack capture yields no frame, which means `skip` is larger
    /// than the call stack.
    #[inline(never)]
    pub fn stamp_detail(&self, mut container: Container, skip: usize) -> Container {
        if container.stamp.is_stamped() {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = %container.message, "container already stamped");
            return container;
        }

        if self.inner.config.enable_timestamp {
            container.stamp.timestamp = Some(Local::now());
        }

        if self.captures_stack(container.severity) {
            let frames = capture::capture(skip + 1);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = %container.message,
                frames = frames.len(),
                "captured stack"
            );
            container.stamp.frames = Some(frames);
        }

        container.stamp.policy = Some(self.clone());
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = %container.message,
            severity = %container.severity,
            "container stamped"
        );
        container
    }

    /// Formats a timestamp with this policy's format.
    #[inline]
    pub fn format_timestamp(&self, timestamp: &DateTime<Local>) -> String {
        self.inner.config.timestamp_format.format(timestamp)
    }

    /// Resolves `frames` into `dest`; returns 0 when the policy has no symbolizer.
    pub fn symbolize(&self, frames: &StackFrames, dest: &mut Vec<String>) -> usize {
        match &self.inner.symbolizer {
            Some(symbolizer) => symbolizer.symbolize(frames.as_slice(), dest),
            None => {
                dest.clear();
                0
            },
        }
    }
}

impl Default for StampPolicy {
    fn default() -> Self {
        Self::new(StampConfig::default())
    }
}

impl fmt::Debug for StampPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampPolicy")
            .field("config", &self.inner.config)
            .field("symbolizer", &self.inner.symbolizer.is_some())
            .finish()
    }
}

/// Metadata attached to a container by its first stamp.
#[derive(Clone, Default)]
pub struct StampMetadata {
    pub(crate) timestamp: Option<DateTime<Local>>,
    pub(crate) frames: Option<StackFrames>,
    pub(crate) policy: Option<StampPolicy>,
}

impl StampMetadata {
    /// Whether a policy has stamped the owner.
    #[inline]
    pub fn is_stamped(&self) -> bool {
        self.policy.is_some()
    }

    /// Time of stamping, if the policy recorded it.
    #[inline]
    pub fn timestamp(&self) -> Option<&DateTime<Local>> {
        self.timestamp.as_ref()
    }

    /// Captured frames, if the severity was stack-eligible.
    #[inline]
    pub fn frames(&self) -> Option<&StackFrames> {
        self.frames.as_ref()
    }

    /// The policy that stamped the owner.
    #[inline]
    pub fn policy(&self) -> Option<&StampPolicy> {
        self.policy.as_ref()
    }

    /// The timestamp rendered with the stamping policy's format, when the
    /// policy has timestamps enabled.
    pub fn formatted_timestamp(&self) -> Option<String> {
        let policy = self.policy.as_ref()?;
        if !policy.config().enable_timestamp {
            return None;
        }
        self.timestamp.as_ref().map(|ts| policy.format_timestamp(ts))
    }
}

impl fmt::Debug for StampMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampMetadata")
            .field("timestamp", &self.timestamp)
            .field("frames", &self.frames.as_ref().map(StackFrames::len))
            .field("stamped", &self.is_stamped())
            .finish()
    }
}

/// The process-wide default policy, created on first use.
///
/// Equivalent to [`StampPolicy::default()`]; it is never mutated after
/// creation.
pub fn default_policy() -> &'static StampPolicy {
    static DEFAULT: OnceLock<StampPolicy> = OnceLock::new();
    DEFAULT.get_or_init(StampPolicy::default)
}

/// Stamps `container` with the default policy.
#[inline(never)]
pub fn stamp(container: Container) -> Container {
    default_policy().stamp_detail(container, 1)
}

/// Stamps `container` with the default policy, skipping `skip` extra frames.
#[inline(never)]
pub fn stamp_detail(container: Container, skip: usize) -> Container {
    default_policy().stamp_detail(container, skip + 1)
}
