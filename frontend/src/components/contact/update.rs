use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ContactForm, SubmitAction};
use crate::services::contact_client;

pub fn update(component: &mut ContactForm, ctx: &Context<ContactForm>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            component.form.edit(field, value);
            true
        }
        Msg::Submit => {
            if component.form.is_sending() {
                return false;
            }
            if let SubmitAction::Send(submission) = component.form.begin_submit() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = contact_client::submit(&submission).await;
                    link.send_message(Msg::Finished(result));
                });
            }
            true
        }
        Msg::Finished(result) => {
            component.form.finish(result);
            true
        }
    }
}
