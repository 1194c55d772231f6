//! Raw call-stack capture.
//!
//! Only program counters are recorded at stamping time. Turning them into
//! `file:line function` strings is deferred to a [`Symbolize`](super::Symbolize)
//! implementation, which runs when a report is rendered.
use core::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// Maximum number of frames kept per captured stack.
pub const MAX_FRAMES: usize = 64;

// Frames walked past the anchor search before giving up on finding it.
const ANCHOR_SEARCH_LIMIT: usize = 32;

/// Program counters captured when a container was stamped, innermost call first.
#[derive(Clone, PartialEq, Eq)]
pub struct StackFrames(Arc<[usize]>);

impl StackFrames {
    /// Wraps already captured program counters.
    pub fn from_raw(frames: impl Into<Arc<[usize]>>) -> Self {
        Self(frames.into())
    }

    /// Returns the raw program counters.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no frame was captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct Address(usize);

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Debug for StackFrames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|&ip| Address(ip)))
            .finish()
    }
}

/// Captures up to [`MAX_FRAMES`] program counters, starting `skip` frames
/// above this function's caller.
///
/// The frames of the unwinder and of this function itself are located by
/// symbol address and dropped before `skip` is applied.
///
/// # Panics
///
/// Panics when no frame remains after skipping. That only happens when the
/// skip count is wrong, and an empty trace would otherwise look exactly like
/// "no trace requested".
#[inline(never)]
pub(crate) fn capture(skip: usize) -> StackFrames {
    let anchor = capture as *const () as usize;
    let budget = MAX_FRAMES + skip + ANCHOR_SEARCH_LIMIT;
    let mut walked: SmallVec<[(usize, usize); MAX_FRAMES]> = SmallVec::new();

    backtrace::trace(|frame| {
        walked.push((frame.ip() as usize, frame.symbol_address() as usize));
        walked.len() < budget
    });

    let start = walked
        .iter()
        .take(ANCHOR_SEARCH_LIMIT)
        .position(|&(_, symbol)| symbol == anchor)
        .map_or(0, |anchor_at| anchor_at + 1);

    let frames: Vec<usize> = walked
        .iter()
        .skip(start + skip)
        .take(MAX_FRAMES)
        .map(|&(ip, _)| ip)
        .collect();

    if frames.is_empty() {
        panic!("cannot capture stack trace: no frames left after skipping {skip} caller frames");
    }

    StackFrames::from_raw(frames)
}
