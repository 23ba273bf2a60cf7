//! View rendering for the contact form.
//!
//! The honeypot input sits inside a container hidden with CSS and
//! `aria-hidden`, out of the tab order, so only automated clients fill it.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ContactForm, Field, SubmitStatus};

pub fn view(component: &ContactForm, ctx: &Context<ContactForm>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let sending = form.is_sending();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            <h3 class="contact-form__title">{"Send Message"}</h3>

            <div class="contact-form__grid">
                { text_input(link, form.value(Field::Name), Field::Name, "name", "Name", "text", "Your name", form.errors.name, sending) }
                { text_input(link, form.value(Field::Email), Field::Email, "email", "Email", "email", "your.email@example.com", form.errors.email, sending) }
                { text_input(link, form.value(Field::Subject), Field::Subject, "subject", "Subject (Optional)", "text", "What's this about?", None, sending) }
                { message_input(link, form.value(Field::Message), form.errors.message, sending) }
            </div>

            <div class="hidden" aria-hidden="true">
                <label for="website">{"Website (Leave this empty)"}</label>
                <input
                    type="text"
                    id="website"
                    name="website"
                    tabindex="-1"
                    autocomplete="off"
                    value={form.value(Field::Website).to_string()}
                    oninput={edit_callback(link, Field::Website)}
                />
            </div>

            { status_banner(&form.status) }

            <button type="submit" class="btn btn--primary contact-form__submit" disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

fn edit_callback(link: &Scope<ContactForm>, field: Field) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(field, input.value())
    })
}

#[allow(clippy::too_many_arguments)]
fn text_input(
    link: &Scope<ContactForm>,
    value: &str,
    field: Field,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    error: Option<&'static str>,
    disabled: bool,
) -> Html {
    let class = classes!("contact-form__input", error.map(|_| "contact-form__input--error"));
    html! {
        <div class="contact-form__field">
            <label for={id}>{label}</label>
            <input
                type={input_type}
                {id}
                name={id}
                {class}
                {placeholder}
                {disabled}
                value={value.to_string()}
                oninput={edit_callback(link, field)}
            />
            { field_error(error) }
        </div>
    }
}

fn message_input(
    link: &Scope<ContactForm>,
    value: &str,
    error: Option<&'static str>,
    disabled: bool,
) -> Html {
    let class = classes!("contact-form__input", error.map(|_| "contact-form__input--error"));
    html! {
        <div class="contact-form__field contact-form__field--wide">
            <label for="message">{"Message"}</label>
            <textarea
                id="message"
                name="message"
                rows="5"
                {class}
                placeholder="Your message here..."
                {disabled}
                value={value.to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Edit(Field::Message, input.value())
                })}
            />
            { field_error(error) }
        </div>
    }
}

fn field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <p class="contact-form__error">{message}</p> },
        None => html! {},
    }
}

fn status_banner(status: &SubmitStatus) -> Html {
    match status {
        SubmitStatus::Succeeded(message) => html! {
            <div class="banner banner--success" role="status">{message.clone()}</div>
        },
        SubmitStatus::Failed(message) => html! {
            <div class="banner banner--error" role="alert">{message.clone()}</div>
        },
        SubmitStatus::Idle | SubmitStatus::Sending => html! {},
    }
}
