use log::Level;

use crate::reveal::Threshold;

pub const BOOKING_URL: &str =
    "https://calendly.com/contact-flatratebookkeeping/hv-outsourcing-client-consultation";

pub const OVERLAY_ROOT_ID: &str = "booking-overlay-root";

/// Viewports at or below this width skip the entrance animation on sections
/// that opt into the mobile fallback.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REVEAL_DURATION_MS: u32 = 1000;
pub const REVEAL_OFFSET_PX: i32 = 40;
pub const DEFAULT_STAGGER_MS: u32 = 100;

pub const HEADER_SCROLLED_AFTER_PX: f64 = 20.0;
pub const METRIC_ROTATION_MS: u32 = 3000;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1000;
pub const CONTACT_RESET_AFTER_MS: u32 = 3000;

/// How much of a section has to be on screen before it reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealTier {
    #[default]
    Standard,
    /// Tall, grid-heavy sections where a fifth of the box may never fit a short viewport.
    Tall,
}

impl RevealTier {
    pub fn threshold(self) -> Threshold {
        match self {
            RevealTier::Standard => Threshold::new(0.2),
            RevealTier::Tall => Threshold::new(0.1),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
