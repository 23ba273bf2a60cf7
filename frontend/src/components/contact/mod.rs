//! Contact form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic and view rendering.
//!
//! Validation runs the shared `common` rules before anything is sent, so the
//! server only sees submissions the form already accepted. A filled honeypot
//! is answered locally with a success message and no request.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ContactForm;

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
