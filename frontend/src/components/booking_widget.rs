use log::warn;
use stylist::css;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::analytics::{current_page_path, GtagSink};
use crate::booking::mount::{acquire_overlay_root, release_overlay_root, BodyMountHost, MountHandle};
use crate::booking::{BookingPhase, BookingWidgetState, ButtonVariant};
use crate::config::BOOKING_URL;

#[derive(Properties, PartialEq)]
pub struct BookingWidgetProps {
    #[prop_or(AttrValue::Static("Partner With Us"))]
    pub text: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(AttrValue::Static(BOOKING_URL))]
    pub booking_url: AttrValue,
    #[prop_or(AttrValue::Static("Partner With Us"))]
    pub tracking_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

const CALENDAR_ICON: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Call-to-action that opens the scheduling page in a full-viewport overlay.
#[function_component(BookingWidget)]
pub fn booking_widget(props: &BookingWidgetProps) -> Html {
    let state = use_state_eq(BookingWidgetState::default);
    let overlay_root = use_state(|| None::<Element>);
    let mount_handle = use_mut_ref(|| None::<MountHandle<BodyMountHost>>);

    {
        let overlay_root = overlay_root.clone();
        let mount_handle = mount_handle.clone();
        use_effect_with_deps(
            move |_| {
                match acquire_overlay_root() {
                    Ok(handle) => {
                        overlay_root.set(Some(handle.node().clone()));
                        *mount_handle.borrow_mut() = Some(handle);
                    }
                    Err(e) => warn!("Booking overlay has nowhere to mount: {}", e),
                }
                move || {
                    let handle = mount_handle.borrow_mut().take();
                    if let Some(handle) = handle {
                        release_overlay_root(handle);
                    }
                }
            },
            (),
        );
    }

    let on_activate = {
        let state = state.clone();
        let label = props.tracking_label.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set((*state).click(&GtagSink, &label, current_page_path()));
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set((*state).dismiss());
        })
    };

    let variant_class = match props.variant {
        ButtonVariant::Primary => "booking-button booking-button-primary",
        ButtonVariant::Compact => "booking-button booking-button-compact",
    };
    let is_loading = state.phase() == BookingPhase::Loading;

    let button = html! {
        <button
            onclick={on_activate}
            class={classes!(variant_class, props.class.clone())}
            disabled={is_loading}
            aria-label={format!("{} - Schedule a consultation with HV Outsourcing", props.text)}
            title="Schedule a free consultation to discuss your BPO needs"
        >
            if is_loading {
                <span class="booking-button-busy">
                    <span class="spinner"></span>
                    <span>{"Loading..."}</span>
                </span>
            } else {
                { props.text.to_string() }
                if props.variant == ButtonVariant::Primary {
                    <svg class="booking-button-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={CALENDAR_ICON} />
                    </svg>
                }
            }
        </button>
    };

    let overlay = match state.overlay_target((*overlay_root).as_ref()) {
        Some(host) => yew::create_portal(render_overlay(&props.booking_url, on_dismiss), host),
        None => html! {},
    };

    html! {
        <>
            { button }
            { overlay }
        </>
    }
}

fn render_overlay(booking_url: &AttrValue, on_dismiss: Callback<MouseEvent>) -> Html {
    let layer = css!(
        r#"
        position: fixed;
        inset: 0;
        z-index: 999999;
        margin: 0;
        padding: 0;
    "#
    );
    let backdrop = css!(
        r#"
        position: absolute;
        inset: 0;
        background-color: rgba(0, 0, 0, 0.7);
        cursor: pointer;
    "#
    );
    let panel = css!(
        r#"
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        width: 90vw;
        max-width: 1200px;
        height: 90vh;
        background-color: white;
        border-radius: 12px;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        overflow: hidden;
    "#
    );
    let close = css!(
        r#"
        position: absolute;
        top: 16px;
        right: 16px;
        z-index: 1000;
        background-color: white;
        border: 2px solid #e5e7eb;
        border-radius: 50%;
        padding: 12px;
        cursor: pointer;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        transition: all 0.2s;
        color: #374151;

        &:hover {
            background-color: #f3f4f6;
            transform: scale(1.05);
        }
    "#
    );
    let frame = css!(
        r#"
        border: none;
        border-radius: 12px;
    "#
    );

    html! {
        <div class={classes!(layer, "booking-overlay")}>
            <div class={classes!(backdrop, "booking-overlay-backdrop")} onclick={on_dismiss.clone()}></div>
            <div class={panel} role="dialog" aria-modal="true">
                <button class={close} onclick={on_dismiss} aria-label="Close booking calendar">
                    <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24" stroke-width="2.5">
                        <path stroke-linecap="round" stroke-linejoin="round" d={CLOSE_ICON} />
                    </svg>
                </button>
                <iframe
                    class={frame}
                    src={booking_url.clone()}
                    width="100%"
                    height="100%"
                    title="Schedule a consultation with HV Outsourcing"
                ></iframe>
            </div>
        </div>
    }
}
