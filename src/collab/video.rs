//! Video source collaborator - live capture acquisition and release.
//!
//! The engine never talks to a camera directly; it reacts to acquisition
//! results the caller obtains through this trait. Failures are classified so
//! the engine can map each reason to a user-facing message.

use crate::types::CaptureFailure;

pub trait VideoSource {
    /// Acquire a capture stream at the requested resolution.
    fn acquire(&mut self, width: u32, height: u32) -> Result<(), CaptureFailure>;

    /// Release the stream. Must be safe to call when nothing is acquired.
    fn release(&mut self);
}

/// Test/demo stand-in: succeeds by default, or always fails with a
/// configured reason.
#[derive(Debug, Default)]
pub struct StubVideoSource {
    fail_with: Option<CaptureFailure>,
    acquired: bool,
}

impl StubVideoSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: CaptureFailure) -> Self {
        Self {
            fail_with: Some(reason),
            acquired: false,
        }
    }

    pub fn is_acquired(&self) -> bool {
        self.acquired
    }
}

impl VideoSource for StubVideoSource {
    fn acquire(&mut self, width: u32, height: u32) -> Result<(), CaptureFailure> {
        if let Some(reason) = self.fail_with {
            log::warn!("video acquisition failed: {}", reason.as_str());
            return Err(reason);
        }
        log::info!("video source acquired at {}x{}", width, height);
        self.acquired = true;
        Ok(())
    }

    fn release(&mut self) {
        if self.acquired {
            log::info!("video source released");
        }
        self.acquired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_acquire_release() {
        let mut video = StubVideoSource::new();
        assert!(video.acquire(1280, 720).is_ok());
        assert!(video.is_acquired());
        video.release();
        assert!(!video.is_acquired());
        // Releasing twice is harmless.
        video.release();
    }

    #[test]
    fn test_stub_failure_reason_is_preserved() {
        let mut video = StubVideoSource::failing(CaptureFailure::DeviceBusy);
        assert_eq!(video.acquire(640, 480), Err(CaptureFailure::DeviceBusy));
        assert!(!video.is_acquired());
    }
}
