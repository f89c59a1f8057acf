//! Screen capture implementations
//!
//! The capture boundary itself is defined in the protocol crate; this
//! module provides the implementations the client runtime ships with.

pub use telestrate_protocol::capture::{CaptureHandle, CaptureOutcome, ScreenCapture};

/// Capture stub that always succeeds, used by the loopback demo
#[derive(Debug, Default)]
pub struct HeadlessCapture {
    active: Option<String>,
}

impl ScreenCapture for HeadlessCapture {
    fn start_capture(&mut self, source_id: &str) -> CaptureOutcome {
        if let Some(previous) = self.active.replace(source_id.to_string()) {
            tracing::debug!("Replacing capture of {}", previous);
        }
        CaptureOutcome::Started(CaptureHandle {
            source_id: source_id.to_string(),
        })
    }

    fn stop_capture(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Capture with a scripted outcome, for exercising the failure paths
    pub struct ScriptedCapture {
        pub outcome: CaptureOutcome,
        pub stopped: bool,
    }

    impl ScriptedCapture {
        pub fn new(outcome: CaptureOutcome) -> Self {
            Self {
                outcome,
                stopped: false,
            }
        }
    }

    impl ScreenCapture for ScriptedCapture {
        fn start_capture(&mut self, _source_id: &str) -> CaptureOutcome {
            self.outcome.clone()
        }

        fn stop_capture(&mut self) {
            self.stopped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_capture_tracks_source() {
        let mut capture = HeadlessCapture::default();
        let outcome = capture.start_capture("screen-0");
        assert_eq!(
            outcome,
            CaptureOutcome::Started(CaptureHandle {
                source_id: "screen-0".to_string()
            })
        );
        capture.stop_capture();
        assert!(capture.active.is_none());
    }
}
