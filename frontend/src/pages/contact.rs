use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, LINKEDIN_URL};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <section class="contact">
            <h1 class="section-heading">{"Get In Touch"}</h1>
            <div class="contact__layout">
                <aside class="contact__info">
                    <p>{"Have a project in mind or just want to say hello? Send a message and I will get back to you."}</p>
                    <dl>
                        <dt>{"Email"}</dt>
                        <dd><a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a></dd>
                        <dt>{"Phone"}</dt>
                        <dd><a href={format!("tel:{CONTACT_PHONE}")}>{ CONTACT_PHONE }</a></dd>
                        <dt>{"LinkedIn"}</dt>
                        <dd><a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"linkedin.com/in/faheez-ayofe"}</a></dd>
                    </dl>
                </aside>
                <ContactForm />
            </div>
        </section>
    }
}
