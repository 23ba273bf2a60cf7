//! Detail view of one project. `full_description` is Markdown.

use common::catalog::CatalogError;
use common::model::project::ProjectRecord;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::markdown_to_html;
use crate::routes::Page;
use crate::services::project_store;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectDetailProps {
    pub id: String,
}

pub enum Msg {
    Loaded(Result<ProjectRecord, CatalogError>),
}

pub struct ProjectDetail {
    project: Option<Result<ProjectRecord, CatalogError>>,
}

impl ProjectDetail {
    fn load(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let id = ctx.props().id.clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(project_store::get_by_id(&id).await));
        });
    }
}

impl Component for ProjectDetail {
    type Message = Msg;
    type Properties = ProjectDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx);
        Self { project: None }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.project = None;
            Self::load(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.project = Some(result);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.project {
            None => html! { <p class="loading">{"Loading project..."}</p> },
            Some(Err(_)) => html! {
                <div class="project-missing">
                    <h1>{"Project not found"}</h1>
                    <p>{"The project you are looking for does not exist or has been removed."}</p>
                    <a class="btn btn--primary" href={Page::Projects.to_hash()}>{"Back to Projects"}</a>
                </div>
            },
            Some(Ok(project)) => render_project(project),
        }
    }
}

fn render_project(project: &ProjectRecord) -> Html {
    let description = Html::from_html_unchecked(AttrValue::from(markdown_to_html(
        &project.full_description,
    )));

    html! {
        <article class="project-detail">
            <a class="back-link" href={Page::Projects.to_hash()}>{"← Back to Projects"}</a>
            <header>
                <span class="project-card__category">{ project.category.clone() }</span>
                <h1>{ project.title.clone() }</h1>
                <p class="lead">{ project.description.clone() }</p>
                <dl class="project-detail__meta">
                    { meta_row("Client", project.client.as_deref()) }
                    { meta_row("Date", project.date.as_deref()) }
                </dl>
                <div class="project-detail__links">
                    { external_link("Live Demo", project.live_demo.as_deref()) }
                    { external_link("Source Code", project.github.as_deref()) }
                </div>
            </header>

            <div class="gallery">
                { for project.image.iter().map(|src| html! {
                    <img src={src.to_string()} alt={project.title.clone()} loading="lazy" />
                }) }
            </div>

            <section class="markdown">{ description }</section>

            if !project.key_features.is_empty() {
                <section>
                    <h2>{"Key Features"}</h2>
                    <ul>
                        { for project.key_features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
                    </ul>
                </section>
            }

            <section>
                <h2>{"Technologies"}</h2>
                <ul class="tags">
                    { for project.technologies.iter().map(|tech| html! { <li class="tag">{ tech.clone() }</li> }) }
                </ul>
            </section>
        </article>
    }
}

fn meta_row(label: &'static str, value: Option<&str>) -> Html {
    match value {
        Some(value) => html! {
            <>
                <dt>{label}</dt>
                <dd>{value.to_string()}</dd>
            </>
        },
        None => html! {},
    }
}

fn external_link(label: &'static str, href: Option<&str>) -> Html {
    match href {
        Some(href) => html! {
            <a class="btn btn--outline" href={href.to_string()} target="_blank" rel="noopener noreferrer">{label}</a>
        },
        None => html! {},
    }
}
