use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

pub const CTA_CLICK_EVENT: &str = "cta_click";

/// One activation of a call-to-action control.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaClick {
    pub label: String,
    pub page_location: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CtaProperties {
    #[serde(rename = "event_category")]
    pub category: &'static str,
    #[serde(rename = "event_label")]
    pub label: String,
    pub page_location: String,
    pub source: &'static str,
}

impl CtaClick {
    pub fn now(label: impl Into<String>, page_location: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            page_location: page_location.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn properties(&self) -> CtaProperties {
        CtaProperties {
            category: "engagement",
            label: self.label.clone(),
            page_location: self.page_location.clone(),
            source: "booking_modal",
        }
    }
}

/// Somewhere click events go. Implementations must swallow their own failures.
pub trait AnalyticsSink {
    fn track(&self, event: &CtaClick);
}

/// Forwards to the page's global `gtag` function when the tag is loaded.
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagSink;

impl GtagSink {
    fn gtag() -> Option<Function> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
        value.dyn_into::<Function>().ok()
    }
}

impl AnalyticsSink for GtagSink {
    fn track(&self, event: &CtaClick) {
        let properties = event.properties();
        match serde_json::to_string(&properties) {
            Ok(json) => info!("CTA clicked at {}: {}", event.timestamp.to_rfc3339(), json),
            Err(e) => warn!("Could not encode CTA click: {}", e),
        }
        #[cfg(debug_assertions)]
        gloo_console::log!("CTA clicked:", event.label.clone(), event.page_location.clone());

        let Some(gtag) = Self::gtag() else {
            debug!("gtag not present, skipping analytics event");
            return;
        };
        let payload = match serde_wasm_bindgen::to_value(&properties) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not convert analytics payload: {}", e);
                return;
            }
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(CTA_CLICK_EVENT),
            &payload,
        ) {
            warn!("gtag call failed: {:?}", e);
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

#[cfg(test)]
impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &CtaClick) {}
}

pub fn current_page_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub events: RefCell<Vec<CtaClick>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &CtaClick) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn properties_use_gtag_field_names() {
        let click = CtaClick::now("Header CTA", "/careers");
        let json = serde_json::to_value(click.properties()).unwrap();
        assert_eq!(json["event_category"], "engagement");
        assert_eq!(json["event_label"], "Header CTA");
        assert_eq!(json["page_location"], "/careers");
        assert_eq!(json["source"], "booking_modal");
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopSink.track(&CtaClick::now("x", "/"));
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::default();
        sink.track(&CtaClick::now("first", "/"));
        sink.track(&CtaClick::now("second", "/about"));
        let labels: Vec<_> = sink.events.borrow().iter().map(|e| e.label.clone()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }
}
