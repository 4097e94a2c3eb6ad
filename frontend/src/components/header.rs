use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::booking::ButtonVariant;
use crate::components::booking_widget::BookingWidget;
use crate::config::HEADER_SCROLLED_AFTER_PX;
use crate::Route;

const NAVIGATION: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Careers", Route::Careers),
    ("Contact", Route::Contact),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();
    let is_scrolled = scroll_y > HEADER_SCROLLED_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_links = |mobile: bool| -> Html {
        NAVIGATION
            .iter()
            .map(|(name, route)| {
                let active = current.as_ref() == Some(route);
                let class = classes!(
                    if mobile { "mobile-nav-link" } else { "nav-link" },
                    active.then_some("active")
                );
                html! {
                    <span onclick={mobile.then(|| close_menu.clone())}>
                        <Link<Route> to={route.clone()} classes={class}>
                            { *name }
                        </Link<Route>>
                    </span>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src="/HVoutsourcingfavicon.webp" alt="HV Outsourcing - Premier BPO and Call Center Services Logo" />
                </Link<Route>>

                <nav class="desktop-nav">
                    { nav_links(false) }
                </nav>

                <div class="desktop-cta">
                    <BookingWidget
                        text="Partner With Us"
                        variant={ButtonVariant::Primary}
                        tracking_label="Header CTA - Partner With Us"
                    />
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    <nav class="mobile-nav">
                        { nav_links(true) }
                        <BookingWidget
                            text="Partner With Us"
                            variant={ButtonVariant::Compact}
                            tracking_label="Mobile Menu - Partner With Us"
                            class="font-medium"
                        />
                    </nav>
                </div>
            }
        </header>
    }
}
