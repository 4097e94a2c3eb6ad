pub mod mount;

use crate::analytics::{AnalyticsSink, CtaClick};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingPhase {
    Idle,
    Loading,
    Open,
}

/// View state of one booking call-to-action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingWidgetState {
    pub is_loading: bool,
    pub is_open: bool,
}

impl BookingWidgetState {
    pub fn phase(&self) -> BookingPhase {
        if self.is_open {
            BookingPhase::Open
        } else if self.is_loading {
            BookingPhase::Loading
        } else {
            BookingPhase::Idle
        }
    }

    pub fn begin_activation(self) -> Self {
        match self.phase() {
            BookingPhase::Idle => Self {
                is_loading: true,
                is_open: false,
            },
            _ => self,
        }
    }

    pub fn complete_activation(self) -> Self {
        match self.phase() {
            BookingPhase::Loading => Self {
                is_loading: false,
                is_open: true,
            },
            _ => self,
        }
    }

    /// Idle -> loading -> open, tracking the click in between. Anything but idle is left alone.
    pub fn activate(self, sink: &dyn AnalyticsSink, click: &CtaClick) -> Self {
        if self.phase() != BookingPhase::Idle {
            return self;
        }
        let loading = self.begin_activation();
        sink.track(click);
        loading.complete_activation()
    }

    /// Builds the click event for `label` and runs [`Self::activate`] with it.
    pub fn click(self, sink: &dyn AnalyticsSink, label: &str, page_location: impl Into<String>) -> Self {
        if self.phase() != BookingPhase::Idle {
            return self;
        }
        self.activate(sink, &CtaClick::now(label, page_location))
    }

    /// Where the overlay should render, if anywhere. Needs the widget open and a mount point held.
    pub fn overlay_target<N: Clone>(&self, mount: Option<&N>) -> Option<N> {
        if self.is_open {
            mount.cloned()
        } else {
            None
        }
    }

    pub fn dismiss(self) -> Self {
        if self.is_open {
            Self::default()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::tests::RecordingSink;
    use crate::analytics::NoopSink;

    #[test]
    fn activation_opens_and_tracks() {
        let sink = RecordingSink::default();
        let state = BookingWidgetState::default().activate(&sink, &CtaClick::now("Hero", "/"));
        assert_eq!(state.phase(), BookingPhase::Open);
        assert!(!state.is_loading);
        assert_eq!(sink.events.borrow().len(), 1);
    }

    #[test]
    fn activating_while_open_is_a_noop() {
        let sink = RecordingSink::default();
        let click = CtaClick::now("Hero", "/");
        let open = BookingWidgetState::default().activate(&sink, &click);
        let again = open.activate(&sink, &click);
        assert_eq!(again, open);
        assert_eq!(sink.events.borrow().len(), 1);
    }

    #[test]
    fn loading_guards_against_double_activation() {
        let sink = RecordingSink::default();
        let loading = BookingWidgetState::default().begin_activation();
        assert_eq!(loading.phase(), BookingPhase::Loading);
        assert_eq!(loading.activate(&sink, &CtaClick::now("Hero", "/")), loading);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn dismissing_closed_widget_is_a_noop() {
        let closed = BookingWidgetState::default();
        assert_eq!(closed.dismiss(), closed);
    }

    #[test]
    fn cycle_repeats() {
        let click = CtaClick::now("Footer", "/contact");
        let mut state = BookingWidgetState::default();
        for _ in 0..3 {
            state = state.activate(&NoopSink, &click);
            assert_eq!(state.phase(), BookingPhase::Open);
            state = state.dismiss();
            assert_eq!(state.phase(), BookingPhase::Idle);
        }
    }

    #[test]
    fn missing_sink_still_opens() {
        let state = BookingWidgetState::default().activate(&NoopSink, &CtaClick::now("x", "/"));
        assert!(state.is_open);
    }

    #[test]
    fn overlay_needs_open_state_and_mount_point() {
        let sink = RecordingSink::default();
        let idle = BookingWidgetState::default();
        assert_eq!(idle.overlay_target(Some(&7u32)), None);

        let open = idle.click(&sink, "Footer", "/contact");
        assert_eq!(open.overlay_target(Some(&7u32)), Some(7));
        assert_eq!(open.overlay_target::<u32>(None), None);
        assert_eq!(open.dismiss().overlay_target(Some(&7u32)), None);
    }

    #[test]
    fn click_while_open_tracks_nothing() {
        let sink = RecordingSink::default();
        let open = BookingWidgetState::default().click(&sink, "Hero", "/");
        assert_eq!(open.click(&sink, "Hero", "/"), open);
        assert_eq!(sink.events.borrow().len(), 1);
        assert_eq!(sink.events.borrow()[0].page_location, "/");
    }

    #[test]
    fn complete_without_begin_does_nothing() {
        let idle = BookingWidgetState::default();
        assert_eq!(idle.complete_activation(), idle);
    }
}
