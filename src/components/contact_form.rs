use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_message::{use_transient_message, FormMessage, MessageKind, StatusMessage};
use crate::contact::{ContactRequest, Submission, SUCCESS_MESSAGE};
use crate::error::FormError;

/// What the form shows after a submit, and the field values to put back.
/// `None` leaves the fields as the visitor typed them.
pub fn submission_outcome(
    result: &Result<Submission, FormError>,
) -> (StatusMessage, Option<ContactRequest>) {
    match result {
        Ok(_) => (
            StatusMessage::new(SUCCESS_MESSAGE, MessageKind::Success),
            Some(ContactRequest::default()),
        ),
        Err(error) => (StatusMessage::new(error.to_string(), MessageKind::Error), None),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let company = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let presenter = use_transient_message();

    let bind_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let company = company.clone();
        let email = email.clone();
        let message = message.clone();
        let presenter = presenter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = ContactRequest {
                name: (*name).clone(),
                company: (*company).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };

            let result = request.submit();
            let (status, reset) = submission_outcome(&result);
            presenter.show(status.text, status.kind);
            if let Some(reset) = reset {
                name.set(reset.name);
                company.set(reset.company);
                email.set(reset.email);
                message.set(reset.message);
            }
            if let Ok(submission) = result {
                submission.log();
            }
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input id="name" type="text" placeholder="Your name"
                        value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-group">
                    <label for="company">{"Company"}</label>
                    <input id="company" type="text" placeholder="Company name"
                        value={(*company).clone()} oninput={bind_input(&company)} />
                </div>
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input id="email" type="email" placeholder="you@company.com"
                    value={(*email).clone()} oninput={bind_input(&email)} />
            </div>
            <div class="form-group">
                <label for="message">{"How can we help?"}</label>
                <textarea id="message" rows="5" placeholder="Tell us about your AI goals"
                    value={(*message).clone()} oninput={on_message} />
            </div>
            <button type="submit" class="btn btn-primary">{"Request Consultation"}</button>
            <FormMessage message={presenter.current().cloned()} />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Jane".to_string(),
            company: "Acme".to_string(),
            email: "jane@acme.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn success_thanks_the_visitor_and_clears_every_field() {
        let (status, reset) = submission_outcome(&filled().submit());

        assert_eq!(status.kind, MessageKind::Success);
        assert_eq!(
            status.text,
            "Thank you! Your consultation request has been received. We'll contact you soon."
        );
        let reset = reset.expect("fields are reset after a successful submit");
        assert!(reset.name.is_empty());
        assert!(reset.company.is_empty());
        assert!(reset.email.is_empty());
        assert!(reset.message.is_empty());
    }

    #[test]
    fn missing_field_keeps_what_was_typed() {
        let request = ContactRequest { company: String::new(), ..filled() };
        let (status, reset) = submission_outcome(&request.submit());

        assert_eq!(status, StatusMessage::new("Please fill in all fields", MessageKind::Error));
        assert_eq!(reset, None);
    }

    #[test]
    fn bad_email_keeps_what_was_typed() {
        let request = ContactRequest { email: "jane@acme".to_string(), ..filled() };
        let (status, reset) = submission_outcome(&request.submit());

        assert_eq!(
            status,
            StatusMessage::new("Please enter a valid email address", MessageKind::Error)
        );
        assert_eq!(reset, None);
    }
}
