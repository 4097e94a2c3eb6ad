use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod booking;
mod config;
mod reveal;
mod components {
    pub mod booking_widget;
    pub mod contact_form;
    pub mod footer;
    pub mod header;
    pub mod reveal_on_scroll;
    pub mod rotator;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod home;
}

use components::{footer::Footer, header::Header};
use pages::{about::About, careers::Careers, contact::Contact, home::Home};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to Home"}</Link<Route>>
        </div>
    }
}

/// Resets the scroll position whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();

    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Header />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use crate::analytics::tests::RecordingSink;
    use crate::booking::mount::tests::FakeHost;
    use crate::booking::mount::OverlayMountRegistry;
    use crate::booking::{BookingPhase, BookingWidgetState};
    use crate::reveal::observer::tests::ScriptedObserver;
    use crate::reveal::style::reveal_style;
    use crate::reveal::{start_reveal, MountEnvironment, RevealState, Threshold};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn section_reveals_then_booking_opens_and_closes() {
        let section = Rc::new(RefCell::new(RevealState::pending()));
        let set_state = {
            let section = Rc::clone(&section);
            move |next: RevealState| *section.borrow_mut() = next
        };
        let desktop = MountEnvironment {
            viewport_width: Some(1280.0),
            observer_available: true,
        };
        let mut observer = start_reveal(
            desktop,
            false,
            || Ok(ScriptedObserver::default()),
            &"header",
            Threshold::new(0.2),
            set_state,
        )
        .unwrap();
        assert_eq!(reveal_style(*section.borrow(), 0, 100).opacity, 0.0);
        observer.deliver("header", 0.5);
        assert_eq!(reveal_style(*section.borrow(), 0, 100).opacity, 1.0);

        let host = FakeHost::default();
        let live = Rc::clone(&host.live);
        let registry = OverlayMountRegistry::new(host);
        let handle = registry.acquire().unwrap();
        assert_eq!(live.borrow().len(), 1);

        let sink = RecordingSink::default();
        let widget = BookingWidgetState::default().click(&sink, "Header CTA", "/");
        assert_eq!(widget.overlay_target(Some(handle.node())), Some(*handle.node()));
        {
            let events = sink.events.borrow();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].label, "Header CTA");
            assert_eq!(events[0].properties().source, "booking_modal");
        }

        let widget = widget.dismiss();
        // overlay content gone, button back to idle, mount point still held
        assert_eq!(widget.overlay_target(Some(handle.node())), None);
        assert_eq!(widget.phase(), BookingPhase::Idle);
        assert_eq!(registry.consumers(), 1);
        assert_eq!(live.borrow().as_slice(), &[*handle.node()]);

        registry.release(handle);
        assert!(live.borrow().is_empty());
        assert!(!registry.is_mounted());
    }
}
