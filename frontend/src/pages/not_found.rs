use yew::prelude::*;

use crate::routes::Page;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <div class="not-found__code">{"404"}</div>
            <h1>{"Page Not Found"}</h1>
            <p>
                {"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."}
            </p>
            <div class="not-found__actions">
                <a class="btn btn--primary" href={Page::Home.to_hash()}>{"Go to Homepage"}</a>
                <a class="btn btn--outline" href={Page::Contact.to_hash()}>{"Contact Support"}</a>
            </div>
        </section>
    }
}
