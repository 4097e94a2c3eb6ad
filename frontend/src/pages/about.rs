use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::booking_widget::BookingWidget;
use crate::components::reveal_on_scroll::{RevealItem, RevealOnScroll};
use crate::components::rotator::{use_rotation, Step};
use crate::config::{RevealTier, METRIC_ROTATION_MS};

const QUICK_STATS: [(&str, &str); 4] = [
    ("180+", "Active Agents"),
    ("50+", "Global Clients"),
    ("$50M+", "Client Revenue"),
    ("96%", "Satisfaction"),
];

const TIMELINE: [(&str, &str, &str); 4] = [
    ("2019", "Founded", "Started with 30 remote agents"),
    ("2020", "Growth", "Expanded operations & services"),
    ("2022", "Scale", "100+ agents serving Fortune 500"),
    ("2024", "Flagship", "Opened Makati call center"),
];

const SCALING: [(&str, &str); 3] = [
    ("Rapid Ramp-Up", "Launch up to 50 agents in less than 2 weeks."),
    ("Seat Capacity", "180 fully operational seats, expandable to 268."),
    ("Flexible Programs", "Inbound, outbound, chat and back-office work on the same floor."),
];

const SUPPORT: [(&str, &str); 3] = [
    ("Dedicated Account Lead", "One U.S.-born point of contact who knows your program."),
    ("Daily Reporting", "Dashboards and reports built by our in-house dev team."),
    ("Quality Assurance", "Calls scored and coached every week to keep quality at 96%."),
];

#[function_component(AboutHero)]
fn about_hero() -> Html {
    html! {
        <RevealOnScroll class="about-hero">
            <div class="hero-grid">
                <RevealItem index={0}>
                    <h1>
                        <span>{"Redefining"}</span>
                        <span class="gradient-text">{"Outsourcing"}</span>
                        <span>{"Excellence"}</span>
                    </h1>
                    <p>
                        {"From a remote team of 30 to a premier enterprise-grade BPO with 180+ operational seats. Discover our journey of innovation, growth, and unwavering commitment to client success."}
                    </p>
                </RevealItem>
                <RevealItem index={1} delay_step_ms={500} class="stats-grid">
                    { for QUICK_STATS.iter().map(|(value, label)| html! {
                        <div class="stat-card">
                            <div class="stat-value">{ *value }</div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    }) }
                </RevealItem>
            </div>
        </RevealOnScroll>
    }
}

#[function_component(AboutOverview)]
fn about_overview() -> Html {
    let timeline = use_rotation(TIMELINE.len(), METRIC_ROTATION_MS);

    html! {
        <RevealOnScroll class="overview-section">
            <RevealItem index={0}>
                <h2>{"Our Journey: "}<span class="gradient-text">{"From Vision to Reality"}</span></h2>
                <p>{"Horvath & Vaeth Outsourcing OPC is a premier, enterprise-grade BPO headquartered in Makati, Philippines."}</p>
            </RevealItem>
            <RevealItem index={1} delay_step_ms={600} class="timeline">
                <h3>{"Our Evolution Timeline"}</h3>
                <div class="timeline-grid">
                    { for TIMELINE.iter().enumerate().map(|(i, (year, title, desc))| {
                        let onclick = {
                            let timeline = timeline.clone();
                            Callback::from(move |_: MouseEvent| timeline.dispatch(Step::Select(i)))
                        };
                        html! {
                            <div
                                class={classes!("timeline-entry", (i == timeline.index).then_some("active"))}
                                onclick={onclick}
                            >
                                <span class="timeline-dot"></span>
                                <div class="timeline-year">{ *year }</div>
                                <div class="timeline-title">{ *title }</div>
                                <p>{ *desc }</p>
                            </div>
                        }
                    }) }
                </div>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(MissionVision)]
fn mission_vision() -> Html {
    html! {
        <RevealOnScroll class="mission-section">
            <RevealItem index={0} delay_step_ms={300}>
                <h2>{"Mission & Vision"}</h2>
            </RevealItem>
            <div class="mission-grid">
                <RevealItem index={1} delay_step_ms={500} class="mission-card">
                    <h3>{"Our Mission"}</h3>
                    <p>{"To be the most revenue-focused and performance-driven outsourcing partner in the world."}</p>
                </RevealItem>
                <RevealItem index={1} delay_step_ms={700} class="mission-card">
                    <h3>{"Our Vision"}</h3>
                    <p>{"We aim to make our clients money, period. By aligning our success with yours, we ensure mutual growth and loyalty."}</p>
                </RevealItem>
            </div>
        </RevealOnScroll>
    }
}

#[function_component(FlexibilityScalability)]
fn flexibility_scalability() -> Html {
    html! {
        <RevealOnScroll class="scaling-section" tier={RevealTier::Tall}>
            <RevealItem index={0}>
                <h2>{"Flexibility & Scalability"}</h2>
            </RevealItem>
            <div class="feature-grid">
                { for SCALING.iter().enumerate().map(|(i, (title, body))| html! {
                    <RevealItem index={i + 1} class="feature-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealItem>
                }) }
            </div>
        </RevealOnScroll>
    }
}

#[function_component(ClientSupport)]
fn client_support() -> Html {
    html! {
        <RevealOnScroll class="support-section">
            <RevealItem index={0}>
                <h2>{"Client Support"}</h2>
                <p>{"Because we are both the client and the provider, we deliver unmatched empathy, accountability, and results."}</p>
            </RevealItem>
            <div class="feature-grid">
                { for SUPPORT.iter().enumerate().map(|(i, (title, body))| html! {
                    <RevealItem index={i + 1} delay_step_ms={200} class="feature-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealItem>
                }) }
            </div>
            <RevealItem index={1} delay_step_ms={900} class="section-cta">
                <BookingWidget text="Schedule a Consultation" tracking_label="About - Client Support" />
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <AboutHero />
            <AboutOverview />
            <MissionVision />
            <FlexibilityScalability />
            <ClientSupport />
        </div>
    }
}
