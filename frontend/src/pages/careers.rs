use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal_on_scroll::{RevealItem, RevealOnScroll};
use crate::Route;

struct Position {
    title: &'static str,
    kind: &'static str,
    compensation: &'static str,
    summary: &'static str,
    duties: [&'static str; 4],
    requirements: [&'static str; 4],
}

const LOCATION: &str = "Makati City, Philippines";

const POSITIONS: [Position; 4] = [
    Position {
        title: "Call Center Team Leads",
        kind: "Full-time",
        compensation: "Competitive + Benefits",
        summary: "Lead and mentor teams of call center agents, ensuring quality service delivery and performance targets.",
        duties: [
            "Manage and coach teams of 10-15 agents",
            "Monitor call quality and provide feedback",
            "Ensure adherence to KPIs and service standards",
            "Report on team performance and metrics",
        ],
        requirements: [
            "Excellent English communication skills",
            "Strong coaching and mentoring abilities",
            "Experience with call center operations",
            "Bachelor's degree preferred",
        ],
    },
    Position {
        title: "Call Center Agents (Outbound)",
        kind: "Full-time",
        compensation: "Base + Incentives",
        summary: "Help businesses stand out online and reach customers effectively through strategic outbound calling campaigns.",
        duties: [
            "Conduct outbound sales and lead generation calls",
            "Build relationships with prospects and clients",
            "Meet daily and monthly calling targets",
            "Update CRM systems with call outcomes",
        ],
        requirements: [
            "Proven B2B sales or outbound calling experience",
            "C2 level English proficiency required",
            "Ability to handle objections professionally",
            "High school diploma minimum",
        ],
    },
    Position {
        title: "Quality Analyst",
        kind: "Full-time",
        compensation: "Competitive + Benefits",
        summary: "Help attract and win new clients by ensuring service quality and driving steady growth for business operations.",
        duties: [
            "Monitor and evaluate call quality",
            "Provide feedback and coaching to agents",
            "Develop quality improvement strategies",
            "Generate quality reports and analytics",
        ],
        requirements: [
            "Strong analytical and evaluation skills",
            "Excellent attention to detail",
            "Experience with quality monitoring tools",
            "Bachelor's degree preferred",
        ],
    },
    Position {
        title: "Hiring Manager",
        kind: "Full-time",
        compensation: "Competitive + Benefits",
        summary: "Create targeted recruitment strategies that attract top talent and drive real results for our growing business.",
        duties: [
            "Develop and execute recruitment strategies",
            "Screen and interview potential candidates",
            "Manage the entire hiring process",
            "Build talent pipelines for future needs",
        ],
        requirements: [
            "Experience in BPO/call center hiring preferred",
            "Strong interviewing and assessment skills",
            "Knowledge of labor laws and regulations",
            "Bachelor's degree in HR or related field",
        ],
    },
];

const PERKS: [(&str, &str); 4] = [
    ("Free Food Fridays", "Lunch on us at the end of every week."),
    ("Game Room", "Video games, creative break areas and a full-size basketball hoop."),
    ("Career Growth", "Agents are promoted to team leads and analysts from within."),
    ("U.S. Leadership", "Learn directly from U.S.-born leaders on every shift."),
];

const PROFILES: [(&str, &str, &str); 3] = [
    ("Maria", "Team Lead", "Started as an outbound agent in 2021 and now coaches a team of twelve."),
    ("Paolo", "Quality Analyst", "Turns call reviews into coaching sessions that agents actually look forward to."),
    ("Jessa", "Outbound Agent", "Closed her first B2B deal in week two and has not looked back."),
];

#[function_component(CareersHero)]
fn careers_hero() -> Html {
    html! {
        <RevealOnScroll class="careers-hero">
            <RevealItem index={0}>
                <h1>{"Join Our Team"}</h1>
                <p>{"Be part of something great. Build your career with a performance-driven team in the heart of Makati."}</p>
            </RevealItem>
            <RevealItem index={1} delay_step_ms={500}>
                <a href="#open-positions" class="hero-cta">{"View Open Positions"}</a>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <RevealOnScroll class="perks-section">
            <RevealItem index={0}>
                <h2>{"Why Work With Us"}</h2>
            </RevealItem>
            <div class="feature-grid">
                { for PERKS.iter().enumerate().map(|(i, (title, body))| html! {
                    <RevealItem index={i + 1} class="feature-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealItem>
                }) }
            </div>
            <RevealItem index={1} delay_step_ms={700} class="perks-banner">
                <p>{"Employee-Centric Culture (HV is COOL)"}</p>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(CareersCommitment)]
fn careers_commitment() -> Html {
    html! {
        <RevealOnScroll class="commitment-section">
            <RevealItem index={1} delay_step_ms={200} class="commitment-card">
                <h3>{"Training"}</h3>
                <p>{"Paid onboarding and weekly coaching for every agent."}</p>
            </RevealItem>
            <RevealItem index={2} delay_step_ms={200} class="commitment-card">
                <h3>{"Recognition"}</h3>
                <p>{"Monthly awards for quality, attendance and sales."}</p>
            </RevealItem>
            <RevealItem index={3} delay_step_ms={200} class="commitment-card">
                <h3>{"Stability"}</h3>
                <p>{"Attrition under 5% because people want to stay."}</p>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(OpenPositions)]
fn open_positions() -> Html {
    let selected = use_state(|| 0usize);
    let position = &POSITIONS[(*selected).min(POSITIONS.len() - 1)];

    html! {
        <RevealOnScroll class="positions-section" id="open-positions">
            <RevealItem index={0}>
                <h2>{"Open Positions"}</h2>
            </RevealItem>
            <RevealItem index={1} class="positions-layout">
                <div class="position-tabs" role="tablist">
                    { for POSITIONS.iter().enumerate().map(|(i, p)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(i))
                        };
                        html! {
                            <button
                                role="tab"
                                class={classes!("position-tab", (i == *selected).then_some("active"))}
                                onclick={onclick}
                            >
                                { p.title }
                            </button>
                        }
                    }) }
                </div>
                <article class="position-detail">
                    <h3>{ position.title }</h3>
                    <p class="position-meta">
                        { format!("{} · {} · {}", LOCATION, position.kind, position.compensation) }
                    </p>
                    <p>{ position.summary }</p>
                    <h4>{"Responsibilities"}</h4>
                    <ul>{ for position.duties.iter().map(|d| html! { <li>{ *d }</li> }) }</ul>
                    <h4>{"Requirements"}</h4>
                    <ul>{ for position.requirements.iter().map(|r| html! { <li>{ *r }</li> }) }</ul>
                    <Link<Route> to={Route::Contact} classes="position-apply">{"Apply Now"}</Link<Route>>
                </article>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(EmployeeProfiles)]
fn employee_profiles() -> Html {
    html! {
        <RevealOnScroll class="profiles-section">
            <RevealItem index={0}>
                <h2>{"Meet the Team"}</h2>
            </RevealItem>
            { for PROFILES.iter().enumerate().map(|(i, (name, role, story))| html! {
                <RevealItem index={i + 1} class="profile-card">
                    <h3>{ *name }</h3>
                    <span class="profile-role">{ *role }</span>
                    <p>{ *story }</p>
                </RevealItem>
            }) }
        </RevealOnScroll>
    }
}

#[function_component(CareersCallToAction)]
fn careers_call_to_action() -> Html {
    html! {
        <RevealOnScroll class="careers-cta">
            <RevealItem index={1} delay_step_ms={600} class="cta-card">
                <h2>{"Ready to Start?"}</h2>
                <p>{"Send us a message and our hiring team will get back to you."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">{"Contact Recruiting"}</Link<Route>>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="page careers-page">
            <CareersHero />
            <WhyChooseUs />
            <CareersCommitment />
            <OpenPositions />
            <EmployeeProfiles />
            <CareersCallToAction />
        </div>
    }
}
