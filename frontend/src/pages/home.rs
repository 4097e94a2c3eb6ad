use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_widget::BookingWidget;
use crate::components::reveal_on_scroll::{RevealItem, RevealOnScroll};
use crate::components::rotator::{use_rotation, Step};
use crate::config::{RevealTier, METRIC_ROTATION_MS};
use crate::Route;

const HERO_METRICS: [(&str, &str); 4] = [
    ("96%", "Quality Score"),
    ("40K+", "Daily Calls"),
    ("<5%", "Attrition"),
    ("180+", "Active Agents"),
];

const DIFFERENTIATORS: [(&str, &str); 6] = [
    ("Owner-Operator Expertise", "We are the rare BPO that also owns and operates the very types of businesses we support. We've lived the pain points and solved them from both sides."),
    ("US-Born Leadership & Talent", "Every shift has U.S.-born leadership on the floor. Our clients never need to explain nuance, we already get it. Proudly U.S.-owned and culturally aligned."),
    ("In-House Dev Team", "One of the only BPOs with an in-house dev team that builds your tools: dashboards, CRMs, reports, and more."),
    ("Scalable Solutions", "Launch up to 50 agents in less than 2 weeks with our proven scalability infrastructure and rapid deployment capabilities."),
    ("Customizable Recruitment", "Our custom-built screening system finds problem solvers, not script readers. Every agent passes our C2 proficiency test."),
    ("Employee-Centric Culture (HV is COOL)", "We've built a workplace people love. From Free Food Friday celebrations and creative break areas to video games and a full-size basketball hoop."),
];

const INSIGHTS: [(&str, &str); 4] = [
    ("$400K/mo", "B2B sales built from zero"),
    ("$100K/mo", "B2C revenue from untapped senior markets"),
    ("<5%", "Attrition Rate"),
    ("96%", "Quality Score"),
];

const INDUSTRIES: [&str; 6] = [
    "E-commerce & Retail",
    "Health & Wellness",
    "Financial Services",
    "Real Estate",
    "SaaS & Technology",
    "Home Services",
];

const TECH_SPECS: [(&str, &str); 4] = [
    ("100+ Mbps Fiber", "High-speed internet connectivity with redundant failover systems"),
    ("AES-256 Encryption", "Military-grade encryption for all data transmissions and storage"),
    ("Cloud Telephony", "AI IVR, ACD, and omnichannel support on a cloud-based platform"),
    ("Daily Backups", "Hybrid cloud/on-prem storage with MFA enforced security"),
];

const STORY_PAGES: [(&str, [&str; 3]); 6] = [
    ("Corporate Overview", [
        "Horvath & Vaeth Outsourcing OPC is a premier, enterprise-grade BPO headquartered in Makati, Philippines, with 180 fully operational seats (expandable to 268).",
        "We serve U.S.-based startups, SMEs, and Fortune 500 companies across a variety of sectors, utilizing programs like Salesforce, Five9, Zoominfo, and more.",
        "Founded in 2019, we began operations remotely with just 30 agents supporting the co-founders' U.S. businesses.",
    ]),
    ("Our Journey", [
        "In December 2024, our vision became fully realized when we opened our flagship physical call center in Makati City.",
        "H&V Outsourcing was built out of necessity to create a highly capable, performance-obsessed customer service and sales team.",
        "One such company, a $50M/year herbal supplement brand, needed everything from customer support to B2B and B2C sales.",
    ]),
    ("Proven Results", [
        "In just a few months, our BPO team grew B2B sales from $0 to $400K/month.",
        "We scaled B2C from nothing to $100K/month by uncovering untapped senior markets.",
        "Our ability to scale fast, test intelligently, and execute relentlessly made us realize we had something bigger.",
    ]),
    ("Our Mission", [
        "To be the most revenue-focused and performance-driven outsourcing partner in the world.",
        "We aim to make our clients money, period. By aligning our success with yours, we ensure mutual growth and loyalty.",
        "Because we are both the client and the provider, we deliver unmatched empathy, accountability, and results.",
    ]),
    ("Technology & Infrastructure", [
        "Enterprise-grade infrastructure with 100+ Mbps fiber with auto-failover + VLAN-secured networks.",
        "Cloud-based telephony systems with AI IVR, ACD, and omnichannel support.",
        "AES-256 encryption, hybrid cloud/on-prem storage, daily backups, MFA enforced security.",
    ]),
    ("Our Team", [
        "Every agent has proven B2B experience and fluent, neutral-accent English verified by C2 proficiency test.",
        "Demonstrated ability to engage in complex, unscripted conversations.",
        "English-only policy enforced on the floor at all times with U.S.-born leadership on every shift.",
    ]),
];

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let rotation = use_rotation(HERO_METRICS.len(), METRIC_ROTATION_MS);
    let (value, label) = HERO_METRICS[rotation.index];

    html! {
        <RevealOnScroll class="hero-section">
            <div class="hero-grid">
                <RevealItem index={0}>
                    <h1>{"Your "}<span class="gradient-text">{"Performance-Driven"}</span></h1>
                    <h2>{"Outsourcing Partner"}</h2>
                    <p class="hero-tagline">{"for Unmatched Growth"}</p>
                </RevealItem>
                <RevealItem index={1} delay_step_ms={300}>
                    <p class="hero-description">
                        {"Enterprise-grade customer service and sales teams for U.S. businesses, run by people who own and operate the same kinds of companies."}
                    </p>
                </RevealItem>
                <RevealItem index={1} delay_step_ms={500} class="hero-metric-card">
                    <div class="hero-metric" key={rotation.index.to_string()}>
                        <span class="hero-metric-value">{ value }</span>
                        <span class="hero-metric-label">{ label }</span>
                    </div>
                </RevealItem>
                <RevealItem index={1} delay_step_ms={700} class="hero-cta-group">
                    <BookingWidget text="Partner With Us" tracking_label="Hero CTA - Partner With Us" />
                    <Link<Route> to={Route::About} classes="hero-secondary-link">
                        {"Learn More"}
                    </Link<Route>>
                </RevealItem>
            </div>
        </RevealOnScroll>
    }
}

#[function_component(WhyChooseHv)]
fn why_choose_hv() -> Html {
    html! {
        <RevealOnScroll class="why-choose-section">
            <RevealItem index={0}>
                <h2>{"Why Choose HV Outsourcing?"}</h2>
            </RevealItem>
            <div class="feature-grid">
                { for DIFFERENTIATORS.iter().enumerate().map(|(i, (title, body))| html! {
                    <RevealItem index={i + 1} class="feature-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealItem>
                }) }
            </div>
            <RevealItem index={1} delay_step_ms={1000} class="section-cta">
                <BookingWidget
                    text="Get Started Today"
                    tracking_label="Why Choose HV - Get Started Today"
                />
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(KeyDataInsights)]
fn key_data_insights() -> Html {
    html! {
        <RevealOnScroll class="insights-section">
            <RevealItem index={0} delay_step_ms={200}>
                <h2>{"Performance Metrics"}</h2>
                <p>{"Numbers from the floor, not from a pitch deck."}</p>
            </RevealItem>
            <div class="insights-grid">
                { for INSIGHTS.iter().enumerate().map(|(i, (value, label))| html! {
                    <RevealItem index={i + 2} delay_step_ms={200} class="insight-card">
                        <span class="insight-value">{ *value }</span>
                        <span class="insight-label">{ *label }</span>
                    </RevealItem>
                }) }
            </div>
        </RevealOnScroll>
    }
}

#[function_component(IndustryExperience)]
fn industry_experience() -> Html {
    html! {
        <RevealOnScroll class="industry-section">
            <RevealItem index={0}>
                <h2>{"Industry Experience"}</h2>
                <p>{"Campaigns we have staffed, scaled, and run end to end."}</p>
            </RevealItem>
            <ul class="industry-list">
                { for INDUSTRIES.iter().enumerate().map(|(i, industry)| html! {
                    <li>
                        <RevealItem index={i + 1}>{ *industry }</RevealItem>
                    </li>
                }) }
            </ul>
        </RevealOnScroll>
    }
}

#[function_component(CorporateOverview)]
fn corporate_overview() -> Html {
    let (title, paragraphs) = STORY_PAGES[0];
    html! {
        <RevealOnScroll class="overview-section">
            <RevealItem index={0}>
                <h2>{ title }</h2>
            </RevealItem>
            { for paragraphs.iter().enumerate().map(|(i, text)| html! {
                <RevealItem index={i + 1} delay_step_ms={300}>
                    <p>{ *text }</p>
                </RevealItem>
            }) }
        </RevealOnScroll>
    }
}

#[function_component(TechInfrastructure)]
fn tech_infrastructure() -> Html {
    html! {
        <RevealOnScroll class="tech-section" tier={RevealTier::Tall} mobile_fallback={true}>
            <RevealItem index={0}>
                <h2>{"Technology & Infrastructure"}</h2>
                <p>{"Enterprise-grade infrastructure with 100+ Mbps fiber with auto-failover + VLAN-secured networks."}</p>
            </RevealItem>
            <div class="tech-grid">
                { for TECH_SPECS.iter().enumerate().map(|(i, (title, body))| html! {
                    <RevealItem index={i + 1} class="tech-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealItem>
                }) }
            </div>
        </RevealOnScroll>
    }
}

#[function_component(EmployeeCommitment)]
fn employee_commitment() -> Html {
    html! {
        <RevealOnScroll class="commitment-section">
            <RevealItem index={0}>
                <h2>{"Our Commitment to Employees"}</h2>
                <p>{"Every agent has proven B2B experience and fluent, neutral-accent English verified by C2 proficiency test."}</p>
            </RevealItem>
            <RevealItem index={1} delay_step_ms={500}>
                <p>{"Free Food Fridays, creative break areas, video games and a full-size basketball hoop keep attrition under 5%."}</p>
            </RevealItem>
            <RevealItem index={1} delay_step_ms={1100}>
                <Link<Route> to={Route::Careers} classes="section-link">{"Join Our Team"}</Link<Route>>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(Storybook)]
fn storybook() -> Html {
    let is_open = use_state(|| false);
    let pages = use_rotation(STORY_PAGES.len(), 0);

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let next = {
        let pages = pages.clone();
        Callback::from(move |_: MouseEvent| pages.dispatch(Step::Forward))
    };
    let prev = {
        let pages = pages.clone();
        Callback::from(move |_: MouseEvent| pages.dispatch(Step::Back))
    };

    let (title, paragraphs) = STORY_PAGES[pages.index];

    html! {
        <section class="storybook-section">
            <h2>{"Explore Our Story: "}<span class="accent">{"A Deeper Dive into HV Outsourcing"}</span></h2>
            <p>{"Discover our journey, capabilities, and commitment through our comprehensive documentation. Click to flip through our story."}</p>
            <button class="storybook-open" onclick={open}>{"Open Our Story"}</button>

            if *is_open {
                <div class="storybook-modal">
                    <div class="storybook-book">
                        <button class="storybook-close" onclick={close} aria-label="Close story">{"✕"}</button>
                        <h3>{ title }</h3>
                        { for paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                        <div class="storybook-controls">
                            <button onclick={prev} aria-label="Previous page">{"‹"}</button>
                            <div class="storybook-dots">
                                { for (0..STORY_PAGES.len()).map(|i| {
                                    let active = i == pages.index;
                                    let select = {
                                        let pages = pages.clone();
                                        Callback::from(move |_: MouseEvent| pages.dispatch(Step::Select(i)))
                                    };
                                    html! {
                                        <button
                                            class={classes!("storybook-dot", active.then_some("active"))}
                                            onclick={select}
                                            aria-label={format!("Go to page {}", i + 1)}
                                        />
                                    }
                                }) }
                            </div>
                            <button onclick={next} aria-label="Next page">{"›"}</button>
                        </div>
                    </div>
                </div>
            }
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home-page">
            <HeroSection />
            <WhyChooseHv />
            <KeyDataInsights />
            <IndustryExperience />
            <CorporateOverview />
            <TechInfrastructure />
            <EmployeeCommitment />
            <Storybook />
        </div>
    }
}
