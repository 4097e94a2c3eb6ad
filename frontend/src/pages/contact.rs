use yew::prelude::*;

use crate::components::booking_widget::BookingWidget;
use crate::components::contact_form::ContactForm;
use crate::components::reveal_on_scroll::{RevealItem, RevealOnScroll};

const CHANNELS: [(&str, &str, &str); 3] = [
    ("Location", "Makati City, Philippines", "Flagship call center opened December 2024"),
    ("Business Hours", "24/7 Operations", "Coverage across all U.S. time zones"),
    ("Direct Contact", "Provided upon inquiry", "Send us a message and we'll reach out"),
];

const SOCIAL: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/"),
    ("Facebook", "https://www.facebook.com/"),
    ("Instagram", "https://www.instagram.com/"),
];

const MAP_EMBED_URL: &str =
    "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3861.8!2d121.0244!3d14.5547!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zTWFrYXRp!5e0!3m2!1sen!2sph";

#[function_component(ContactHero)]
fn contact_hero() -> Html {
    html! {
        <RevealOnScroll class="contact-hero">
            <RevealItem index={0}>
                <h1>{"Let's Talk"}</h1>
                <p>{"Whether you're looking to scale your operations or join our team, we'd love to hear from you."}</p>
            </RevealItem>
            <RevealItem index={1} delay_step_ms={400} class="hero-actions">
                <BookingWidget text="Book a Call" tracking_label="Contact Hero - Client Inquiries" />
                <a href="#contact-form" class="secondary-cta">{"Send a Message"}</a>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(ContactInfo)]
fn contact_info() -> Html {
    html! {
        <RevealOnScroll class="contact-info">
            { for CHANNELS.iter().enumerate().map(|(i, (title, value, note))| html! {
                <RevealItem index={i} delay_step_ms={150} class="info-card">
                    <h3>{ *title }</h3>
                    <p class="info-value">{ *value }</p>
                    <p class="info-note">{ *note }</p>
                </RevealItem>
            }) }
        </RevealOnScroll>
    }
}

#[function_component(SocialMedia)]
fn social_media() -> Html {
    html! {
        <RevealOnScroll class="social-section">
            <RevealItem index={0}>
                <h2>{"Follow Us"}</h2>
                <div class="social-links">
                    { for SOCIAL.iter().map(|(name, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{ *name }</a>
                    }) }
                </div>
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(ContactFormSection)]
fn contact_form_section() -> Html {
    html! {
        <RevealOnScroll class="form-section" id="contact-form">
            <RevealItem index={0}>
                <h2>{"Send Us a Message"}</h2>
            </RevealItem>
            <RevealItem index={1}>
                <ContactForm />
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(Map)]
fn map() -> Html {
    html! {
        <RevealOnScroll class="map-section">
            <RevealItem index={0}>
                <iframe
                    title="HV Outsourcing location"
                    src={MAP_EMBED_URL}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    allowfullscreen={true}
                />
            </RevealItem>
        </RevealOnScroll>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <ContactHero />
            <ContactInfo />
            <SocialMedia />
            <ContactFormSection />
            <Map />
        </div>
    }
}
