//! Scroll-triggered, one-shot section reveal.
//!
//! A section starts out pending and latches visible the first time enough of
//! it intersects the viewport. Anything that prevents observation (a narrow
//! viewport with the mobile fallback enabled, or a runtime without
//! `IntersectionObserver`) reveals the section at mount instead.

pub mod observer;
pub mod style;

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

use crate::config::MOBILE_BREAKPOINT_PX;
use observer::{AlwaysVisibleObserver, ObserveError, RatioCallback, ViewportObserver};

/// Ratios reported at a threshold crossing can land a hair under the threshold.
const RATIO_TOLERANCE: f64 = 0.001;

/// Fraction of the element's area that has to be on screen, clamped to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True for any non-zero ratio within [`RATIO_TOLERANCE`] of the threshold or above it.
    pub fn is_met(self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.0
    }
}

/// What an observer callback tells its observer after handling a ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_become_visible: bool,
}

impl RevealState {
    pub fn pending() -> Self {
        Self { has_become_visible: false }
    }

    pub fn visible() -> Self {
        Self { has_become_visible: true }
    }

    /// Feeds one intersection ratio into the latch. Once visible, stays visible.
    pub fn observe(&mut self, ratio: f64, threshold: Threshold) -> Observation {
        if !self.has_become_visible && threshold.is_met(ratio) {
            self.has_become_visible = true;
        }
        if self.has_become_visible {
            Observation::Done
        } else {
            Observation::Continue
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MountEnvironment {
    pub viewport_width: Option<f64>,
    pub observer_available: bool,
}

impl MountEnvironment {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                viewport_width: None,
                observer_available: false,
            };
        };
        let viewport_width = window.inner_width().ok().and_then(|w| w.as_f64());
        let observer_available =
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        Self {
            viewport_width,
            observer_available,
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self.viewport_width, Some(w) if w <= MOBILE_BREAKPOINT_PX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealReason {
    NarrowViewport,
    ObserverUnavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountDecision {
    RevealNow(RevealReason),
    Observe,
}

pub fn mount_decision(env: MountEnvironment, mobile_fallback: bool) -> MountDecision {
    if mobile_fallback && env.is_narrow() {
        return MountDecision::RevealNow(RevealReason::NarrowViewport);
    }
    if !env.observer_available {
        return MountDecision::RevealNow(RevealReason::ObserverUnavailable);
    }
    MountDecision::Observe
}

/// Starts watching `region` and reports the section's state through `set_state`.
///
/// Returns the observer while it still has a live registration; the caller
/// hands it back to `unobserve` on teardown. Every path that cannot observe
/// ends with `set_state(RevealState::visible())`.
pub fn start_reveal<R, O, F>(
    env: MountEnvironment,
    mobile_fallback: bool,
    make_observer: impl FnOnce() -> Result<O, ObserveError>,
    region: &R,
    threshold: Threshold,
    set_state: F,
) -> Option<O>
where
    R: ?Sized,
    O: ViewportObserver<R>,
    F: Fn(RevealState) + Clone + 'static,
{
    if let MountDecision::RevealNow(reason) = mount_decision(env, mobile_fallback) {
        debug!("revealing at mount: {:?}", reason);
        set_state(RevealState::visible());
        return None;
    }

    let on_ratio: RatioCallback = {
        let set_state = set_state.clone();
        let mut latch = RevealState::pending();
        Box::new(move |ratio| {
            let outcome = latch.observe(ratio, threshold);
            if latch.has_become_visible {
                set_state(latch);
            }
            outcome
        })
    };

    match make_observer() {
        Ok(mut observer) => match observer.observe(region, threshold, on_ratio) {
            Ok(()) => Some(observer),
            Err(e) => {
                warn!("Section observation failed, showing it: {}", e);
                set_state(RevealState::visible());
                None
            }
        },
        Err(e) => {
            warn!("Section observation unavailable, showing it: {}", e);
            if let Err(e) = AlwaysVisibleObserver.observe(region, threshold, on_ratio) {
                warn!("Fallback observer failed: {}", e);
                set_state(RevealState::visible());
            }
            None
        }
    }
}
