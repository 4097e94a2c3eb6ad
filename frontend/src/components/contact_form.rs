use std::fmt;
use std::str::FromStr;

use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{CONTACT_RESET_AFTER_MS, CONTACT_SUBMIT_DELAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    ClientInquiry,
    JobApplicationInquiry,
    GeneralInquiry,
}

impl Subject {
    pub const ALL: [Subject; 3] = [
        Subject::ClientInquiry,
        Subject::JobApplicationInquiry,
        Subject::GeneralInquiry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::ClientInquiry => "Client Inquiry",
            Subject::JobApplicationInquiry => "Job Application Inquiry",
            Subject::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| FormError::UnknownSubject(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormData {
    pub full_name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactFormData {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::Missing("Full name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("Email address"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(FormError::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(FormError::Missing("Message"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let data = use_state(ContactFormData::default);
    let status = use_state_eq(|| FormStatus::Editing);
    let error = use_state(|| None::<String>);

    let on_name = {
        let data = data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            data.set(ContactFormData {
                full_name: input.value(),
                ..(*data).clone()
            });
        })
    };
    let on_email = {
        let data = data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            data.set(ContactFormData {
                email: input.value(),
                ..(*data).clone()
            });
        })
    };
    let on_subject = {
        let data = data.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let subject = select.value().parse().unwrap_or_default();
            data.set(ContactFormData {
                subject,
                ..(*data).clone()
            });
        })
    };
    let on_message = {
        let data = data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            data.set(ContactFormData {
                message: input.value(),
                ..(*data).clone()
            });
        })
    };

    let on_submit = {
        let data = data.clone();
        let status = status.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status != FormStatus::Editing {
                return;
            }
            if let Err(err) = data.validate() {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            status.set(FormStatus::Submitting);

            let data = data.clone();
            let status = status.clone();
            spawn_local(async move {
                TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
                info!("Contact form submitted: {}", data.subject);
                status.set(FormStatus::Submitted);

                TimeoutFuture::new(CONTACT_RESET_AFTER_MS).await;
                data.set(ContactFormData::default());
                status.set(FormStatus::Editing);
            });
        })
    };

    if *status == FormStatus::Submitted {
        return html! {
            <div class="contact-card contact-card-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
            </div>
        };
    }

    let submitting = *status == FormStatus::Submitting;

    html! {
        <div class="contact-card">
            <h3>{"Send us a Message"}</h3>
            <form onsubmit={on_submit} class="contact-form">
                <div class="form-field">
                    <label for="fullName">{"Full Name *"}</label>
                    <input type="text" id="fullName" name="fullName" required={true}
                        value={data.full_name.clone()} oninput={on_name}
                        placeholder="Enter your full name" />
                </div>
                <div class="form-field">
                    <label for="email">{"Email Address *"}</label>
                    <input type="email" id="email" name="email" required={true}
                        value={data.email.clone()} oninput={on_email}
                        placeholder="Enter your email address" />
                </div>
                <div class="form-field">
                    <label for="subject">{"Subject *"}</label>
                    <select id="subject" name="subject" onchange={on_subject}>
                        { for Subject::ALL.iter().map(|subject| html! {
                            <option value={subject.as_str()} selected={*subject == data.subject}>
                                { subject.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label for="message">{"Message *"}</label>
                    <textarea id="message" name="message" required={true} rows="6"
                        value={data.message.clone()} oninput={on_message}
                        placeholder="Tell us about your needs or questions..." />
                </div>
                if let Some(message) = (*error).clone() {
                    <p class="form-error">{ message }</p>
                }
                <button type="submit" class="contact-submit" disabled={submitting}>
                    if submitting {
                        <span class="spinner"></span>
                        {"Sending..."}
                    } else {
                        {"Send Message"}
                    }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            full_name: "Ana Reyes".to_string(),
            email: "ana@example.com".to_string(),
            subject: Subject::GeneralInquiry,
            message: "Looking for 20 outbound seats.".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let form = ContactFormData {
            full_name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("Full name")));

        let form = ContactFormData {
            message: "\n\t".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("Message")));
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        for email in ["ana", "@example.com", "ana@"] {
            let form = ContactFormData {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn subject_round_trips_through_its_label() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>(), Ok(subject));
        }
        assert_eq!(
            "Sales".parse::<Subject>(),
            Err(FormError::UnknownSubject("Sales".to_string()))
        );
    }

    #[test]
    fn default_subject_is_client_inquiry() {
        assert_eq!(ContactFormData::default().subject, Subject::ClientInquiry);
    }
}
