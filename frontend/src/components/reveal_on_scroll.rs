use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{RevealTier, DEFAULT_STAGGER_MS};
use crate::reveal::observer::{AlwaysVisibleObserver, DomViewportObserver, ViewportObserver};
use crate::reveal::style::reveal_style;
use crate::reveal::{start_reveal, MountEnvironment, RevealState, Threshold};

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tier: RevealTier,
    /// Overrides the tier's threshold when set.
    #[prop_or_default]
    pub threshold: Option<f64>,
    /// Reveal at mount on narrow viewports instead of waiting for a scroll.
    #[prop_or_default]
    pub mobile_fallback: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Wraps a section and latches it visible the first time it scrolls into view.
///
/// The latch is shared with descendants through context; [`RevealItem`] reads
/// it to pick hidden or visible styling.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state_eq(RevealState::pending);
    let threshold = props
        .threshold
        .map(Threshold::new)
        .unwrap_or_else(|| props.tier.threshold());
    let mobile_fallback = props.mobile_fallback;

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let env = MountEnvironment::detect();
                let set_state = move |next: RevealState| reveal.set(next);
                let element = node.cast::<Element>();
                let active = match &element {
                    Some(element) => start_reveal(
                        env,
                        mobile_fallback,
                        DomViewportObserver::new,
                        element,
                        threshold,
                        set_state,
                    ),
                    None => {
                        warn!("Reveal wrapper has no element, showing it");
                        start_reveal(
                            env,
                            mobile_fallback,
                            || Ok(AlwaysVisibleObserver),
                            &(),
                            threshold,
                            set_state,
                        );
                        None
                    }
                };

                move || {
                    if let (Some(mut observer), Some(element)) = (active, element) {
                        observer.unobserve(&element);
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<RevealState> context={*reveal}>
            <div ref={node} id={props.id.clone()} class={classes!("reveal-section", props.class.clone(), reveal.has_become_visible.then_some("is-revealed"))}>
                { for props.children.iter() }
            </div>
        </ContextProvider<RevealState>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub index: usize,
    #[prop_or(DEFAULT_STAGGER_MS)]
    pub delay_step_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// A staggered child of a [`RevealOnScroll`]. Renders visible when there is no wrapper.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let state = use_context::<RevealState>().unwrap_or_else(RevealState::visible);
    let style = reveal_style(state, props.index, props.delay_step_ms).to_css();

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
