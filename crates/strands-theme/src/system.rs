//! OS color-scheme detection and change watching.
//!
//! [`detect_system_theme`] asks the OS through `dark-light`. Override it for
//! testing or to force a mode with [`set_scheme_detector`]:
//!
//! ```rust
//! use strands_theme::{detect_system_theme, set_scheme_detector, Theme};
//!
//! set_scheme_detector(|| Theme::Dark);
//! assert_eq!(detect_system_theme(), Theme::Dark);
//! # strands_theme::reset_scheme_detector();
//! ```
//!
//! The OS offers no portable change notification, so [`SystemWatcher`] turns
//! repeated readings into change events: poll it from the host's event loop
//! and it reports a theme only when the reading differs from the last one.

use dark_light::Mode as OsMode;
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::Theme;

/// A function that reads the current system theme.
pub type SchemeDetector = fn() -> Theme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used by [`detect_system_theme`].
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Restores OS detection.
pub fn reset_scheme_detector() {
    set_scheme_detector(os_scheme_detector);
}

/// Reads the current system theme using the configured detector.
pub fn detect_system_theme() -> Theme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

/// Asks the OS. An unspecified scheme or a failed query reads as light, the
/// same as a `prefers-color-scheme: dark` query that does not match.
fn os_scheme_detector() -> Theme {
    match dark_light::detect() {
        Ok(OsMode::Dark) => Theme::Dark,
        Ok(OsMode::Light) | Ok(OsMode::Unspecified) => Theme::Light,
        Err(err) => {
            tracing::debug!(error = %err, "color scheme detection failed, assuming light");
            Theme::Light
        }
    }
}

/// Turns successive system readings into change notifications.
#[derive(Debug, Clone)]
pub struct SystemWatcher {
    last: Theme,
    detector: SchemeDetector,
}

impl SystemWatcher {
    /// Starts watching with the process-wide detector. The initial reading is
    /// taken now and is not reported as a change.
    pub fn new() -> Self {
        Self::with_detector(detect_system_theme)
    }

    /// Starts watching with a specific detector.
    pub fn with_detector(detector: SchemeDetector) -> Self {
        Self {
            last: detector(),
            detector,
        }
    }

    /// The most recent reading.
    pub fn current(&self) -> Theme {
        self.last
    }

    /// Takes a fresh reading. Returns it only if it differs from the last one.
    pub fn poll(&mut self) -> Option<Theme> {
        let reading = (self.detector)();
        if reading == self.last {
            return None;
        }
        tracing::debug!(from = %self.last, to = %reading, "system theme changed");
        self.last = reading;
        Some(reading)
    }
}

impl Default for SystemWatcher {
    fn default() -> Self {
        Self::new()
    }
}
