//! Full project listing with a technology filter.

use std::rc::Rc;

use common::catalog::{ProjectCatalog, ALL_TECHNOLOGIES};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::card::ProjectCard;
use crate::services::project_store;

pub enum Msg {
    Loaded(Rc<ProjectCatalog>),
    Filter(String),
}

pub struct ProjectList {
    catalog: Option<Rc<ProjectCatalog>>,
    filter: String,
}

impl Component for ProjectList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(project_store::list_all().await));
        });

        Self {
            catalog: None,
            filter: ALL_TECHNOLOGIES.to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(catalog) => {
                self.catalog = Some(catalog);
                true
            }
            Msg::Filter(technology) => {
                if self.filter == technology {
                    return false;
                }
                self.filter = technology;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(catalog) = &self.catalog else {
            return html! { <p class="loading">{"Loading projects..."}</p> };
        };

        let link = ctx.link();
        let filters = std::iter::once(ALL_TECHNOLOGIES).chain(catalog.technologies());
        let projects = catalog.filter_by_technology(&self.filter);

        html! {
            <div class="project-list">
                <div class="filters" role="toolbar">
                    {
                        for filters.map(|technology| {
                            let active = technology == self.filter;
                            let label = if technology == ALL_TECHNOLOGIES { "All" } else { technology };
                            let value = technology.to_string();
                            html! {
                                <button
                                    class={classes!("filter", active.then_some("filter--active"))}
                                    onclick={link.callback(move |_| Msg::Filter(value.clone()))}
                                >
                                    { label }
                                </button>
                            }
                        })
                    }
                </div>
                {
                    if projects.is_empty() {
                        html! { <p class="empty">{"No projects use this technology yet."}</p> }
                    } else {
                        html! {
                            <div class="project-grid">
                                { for projects.into_iter().map(|project| html! {
                                    <ProjectCard key={project.id.clone()} project={project.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}
