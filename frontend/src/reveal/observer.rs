use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Observation, Threshold};

pub type RatioCallback = Box<dyn FnMut(f64) -> Observation>;

#[derive(Debug, Error, PartialEq)]
pub enum ObserveError {
    #[error("IntersectionObserver is not available in this runtime")]
    Unsupported,
    #[error("observer setup failed: {0}")]
    Platform(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Platform(format!("{:?}", value))
    }
}

/// Reports how much of a region is inside the viewport.
///
/// The callback is invoked with each new intersection ratio until it returns
/// [`Observation::Done`], after which the region is no longer observed.
pub trait ViewportObserver<R: ?Sized> {
    fn observe(
        &mut self,
        region: &R,
        threshold: Threshold,
        callback: RatioCallback,
    ) -> Result<(), ObserveError>;

    fn unobserve(&mut self, region: &R);
}

/// Treats every region as fully on screen. Used where the platform can't observe.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysVisibleObserver;

impl<R: ?Sized> ViewportObserver<R> for AlwaysVisibleObserver {
    fn observe(
        &mut self,
        _region: &R,
        _threshold: Threshold,
        mut callback: RatioCallback,
    ) -> Result<(), ObserveError> {
        callback(1.0);
        Ok(())
    }

    fn unobserve(&mut self, _region: &R) {}
}

struct Registration {
    region: Element,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// `IntersectionObserver`-backed observer. Dropping it disconnects everything it registered.
pub struct DomViewportObserver {
    registrations: Vec<Registration>,
}

impl DomViewportObserver {
    pub fn new() -> Result<Self, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::Unsupported)?;
        let available = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !available {
            return Err(ObserveError::Unsupported);
        }
        Ok(Self {
            registrations: Vec::new(),
        })
    }
}

impl ViewportObserver<Element> for DomViewportObserver {
    fn observe(
        &mut self,
        region: &Element,
        threshold: Threshold,
        mut callback: RatioCallback,
    ) -> Result<(), ObserveError> {
        let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if callback(entry.intersection_ratio()) == Observation::Done {
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
        observer.observe(region);
        debug!("observing region at threshold {}", threshold.value());

        self.registrations.push(Registration {
            region: region.clone(),
            observer,
            _callback: closure,
        });
        Ok(())
    }

    fn unobserve(&mut self, region: &Element) {
        self.registrations.retain(|registration| {
            if &registration.region == region {
                registration.observer.disconnect();
                false
            } else {
                true
            }
        });
    }
}

impl Drop for DomViewportObserver {
    fn drop(&mut self) {
        for registration in self.registrations.drain(..) {
            registration.observer.disconnect();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reveal::RevealState;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Observer driven by hand: the test decides which ratios arrive and when.
    #[derive(Default)]
    pub(crate) struct ScriptedObserver {
        callbacks: HashMap<&'static str, RatioCallback>,
        unsupported: bool,
    }

    impl ScriptedObserver {
        /// Rejects every registration.
        pub(crate) fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Default::default()
            }
        }

        pub(crate) fn deliver(&mut self, region: &'static str, ratio: f64) {
            let done = match self.callbacks.get_mut(region) {
                Some(callback) => callback(ratio) == Observation::Done,
                None => false,
            };
            if done {
                self.unobserve(&region);
            }
        }

        pub(crate) fn is_observing(&self, region: &str) -> bool {
            self.callbacks.contains_key(region)
        }
    }

    impl ViewportObserver<&'static str> for ScriptedObserver {
        fn observe(
            &mut self,
            region: &&'static str,
            _threshold: Threshold,
            callback: RatioCallback,
        ) -> Result<(), ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            self.callbacks.insert(*region, callback);
            Ok(())
        }

        fn unobserve(&mut self, region: &&'static str) {
            self.callbacks.remove(*region);
        }
    }

    fn latch_callback(state: Rc<RefCell<RevealState>>, threshold: Threshold) -> RatioCallback {
        Box::new(move |ratio| state.borrow_mut().observe(ratio, threshold))
    }

    #[test]
    fn always_visible_reports_full_ratio_once() {
        let state = Rc::new(RefCell::new(RevealState::pending()));
        let mut observer = AlwaysVisibleObserver;
        ViewportObserver::<str>::observe(
            &mut observer,
            "hero",
            Threshold::new(1.0),
            latch_callback(state.clone(), Threshold::new(1.0)),
        )
        .unwrap();
        assert!(state.borrow().has_become_visible);
    }

    #[test]
    fn scripted_observer_stops_after_reveal() {
        let threshold = Threshold::new(0.2);
        let state = Rc::new(RefCell::new(RevealState::pending()));
        let mut observer = ScriptedObserver::default();
        observer
            .observe(&"why-choose", threshold, latch_callback(state.clone(), threshold))
            .unwrap();

        observer.deliver("why-choose", 0.1);
        assert!(observer.is_observing("why-choose"));
        observer.deliver("why-choose", 0.3);
        assert!(!observer.is_observing("why-choose"));
        assert!(state.borrow().has_become_visible);

        observer.deliver("why-choose", 0.0);
        assert!(state.borrow().has_become_visible);
    }

    #[test]
    fn setup_failure_falls_back_to_visible() {
        let threshold = Threshold::new(0.2);
        let state = Rc::new(RefCell::new(RevealState::pending()));
        let mut observer = ScriptedObserver::unsupported();
        let result = observer.observe(
            &"tech",
            threshold,
            latch_callback(state.clone(), threshold),
        );
        assert_eq!(result, Err(ObserveError::Unsupported));

        let mut fallback = AlwaysVisibleObserver;
        ViewportObserver::<&'static str>::observe(
            &mut fallback,
            &"tech",
            threshold,
            latch_callback(state.clone(), threshold),
        )
        .unwrap();
        assert!(state.borrow().has_become_visible);
    }
}
