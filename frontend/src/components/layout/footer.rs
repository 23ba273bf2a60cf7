use js_sys::Date;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, GITHUB_URL, LINKEDIN_URL, OWNER_NAME};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer__social">
                <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                <a href={format!("mailto:{CONTACT_EMAIL}")}>{"Email"}</a>
            </div>
            <div class="footer__contact">
                <a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                <a href={format!("tel:{CONTACT_PHONE}")}>{ CONTACT_PHONE }</a>
            </div>
            <p class="footer__copyright">{ format!("© {year} {OWNER_NAME}. All rights reserved.") }</p>
        </footer>
    }
}
