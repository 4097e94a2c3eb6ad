use super::RevealState;
use crate::config::{REVEAL_DURATION_MS, REVEAL_OFFSET_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleDescriptor {
    pub opacity: f32,
    pub translate_y_px: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl StyleDescriptor {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            self.opacity,
            self.translate_y_px,
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

/// Style for the `index`-th child of a reveal group, staggered by `delay_step_ms`.
pub fn reveal_style(state: RevealState, index: usize, delay_step_ms: u32) -> StyleDescriptor {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    let (opacity, translate_y_px) = if state.has_become_visible {
        (1.0, 0)
    } else {
        (0.0, REVEAL_OFFSET_PX)
    };
    StyleDescriptor {
        opacity,
        translate_y_px,
        duration_ms: REVEAL_DURATION_MS,
        delay_ms: index.saturating_mul(delay_step_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_offset_and_transparent() {
        let style = reveal_style(RevealState::pending(), 0, 100);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y_px, 40);
        assert_eq!(style.delay_ms, 0);
    }

    #[test]
    fn visible_sits_in_place() {
        let style = reveal_style(RevealState::visible(), 3, 200);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y_px, 0);
        assert_eq!(style.delay_ms, 600);
        assert_eq!(style.duration_ms, 1000);
    }

    #[test]
    fn huge_index_saturates() {
        let style = reveal_style(RevealState::visible(), usize::MAX, 100);
        assert_eq!(style.delay_ms, u32::MAX);
    }

    #[test]
    fn css_carries_delay_on_both_properties() {
        let css = reveal_style(RevealState::visible(), 2, 150).to_css();
        assert!(css.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(css.contains("opacity 1000ms ease-out 300ms"));
        assert!(css.contains("transform 1000ms ease-out 300ms"));
    }
}
