//! Screen capture boundary
//!
//! The OS capture picker and the capture pipeline live outside this
//! library; they are consumed through the [`ScreenCapture`] trait. The one
//! behavior the protocol layer depends on: user cancellation of the picker
//! is an expected outcome, distinct from a genuine failure, and must never
//! surface as an error.

/// Result of a capture start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Capture is running
    Started(CaptureHandle),

    /// The user dismissed the capture picker
    Cancelled,

    /// The capture pipeline failed to start
    Failed(String),
}

/// Handle to a running capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureHandle {
    /// Identity of the captured source
    pub source_id: String,
}

/// Interface to the platform screen-capture implementation
pub trait ScreenCapture {
    /// Start capturing the given source
    fn start_capture(&mut self, source_id: &str) -> CaptureOutcome;

    /// Stop any running capture; harmless when idle
    fn stop_capture(&mut self);
}
