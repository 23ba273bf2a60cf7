//! Application shell: navbar, the current page and the footer.
//!
//! The current page is derived from `location.hash` on startup and on every
//! `hashchange` event.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html};

use crate::components::layout::{Footer, Navbar};
use crate::components::projects::ProjectDetail;
use crate::helpers::scroll_to_top;
use crate::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ProjectsPage};
use crate::routes::Page;

pub enum Msg {
    HashChanged,
}

pub struct App {
    page: Page,
    _hash_listener: Option<Closure<dyn Fn()>>,
}

fn current_page() -> Page {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::HashChanged));
        let registered = web_sys::window().is_some_and(|window| {
            window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .is_ok()
        });

        Self {
            page: current_page(),
            _hash_listener: registered.then_some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HashChanged => {
                let page = current_page();
                if page == self.page {
                    return false;
                }
                self.page = page;
                scroll_to_top();
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match &self.page {
            Page::Home => html! { <HomePage /> },
            Page::About => html! { <AboutPage /> },
            Page::Projects => html! { <ProjectsPage /> },
            Page::ProjectDetail(id) => html! { <ProjectDetail id={id.clone()} /> },
            Page::Contact => html! { <ContactPage /> },
            Page::NotFound => html! { <NotFoundPage /> },
        };

        html! {
            <>
                <Navbar current={self.page.clone()} />
                <main class="page">{ content }</main>
                <Footer />
            </>
        }
    }
}
