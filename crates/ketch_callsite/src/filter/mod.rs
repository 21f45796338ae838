//! Stack-frame filtering for rendered callsites.

use crate::StackFrame;

/// Decides which native frames appear under a rendered callsite.
///
/// Runtime-internal and dependency frames are always dropped; of the rest,
/// at most `frame_limit` are kept, innermost first.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct StackFilter {
    frame_limit: usize,
}

impl StackFilter {
    /// Create a filter bounded by the stack-trace depth limit.
    pub fn new(frame_limit: usize) -> Self {
        StackFilter { frame_limit }
    }

    pub fn frame_limit(self) -> usize {
        self.frame_limit
    }

    /// Whether `frame` is eligible at all, regardless of the depth limit.
    pub fn accepts(self, frame: &StackFrame) -> bool {
        !frame.is_internal()
    }

    /// Select the frames to render, preserving order.
    pub fn apply(self, frames: &[StackFrame]) -> Vec<&StackFrame> {
        frames
            .iter()
            .filter(|frame| self.accepts(frame))
            .take(self.frame_limit)
            .collect()
    }
}
