use common::model::project::ProjectRecord;
use yew::prelude::*;

use crate::routes::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: ProjectRecord,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let href = Page::ProjectDetail(project.id.clone()).to_hash();

    html! {
        <article class="project-card">
            <a class="project-card__link" {href}>
                {
                    match project.image.cover() {
                        Some(src) => html! {
                            <img class="project-card__image" src={src.to_string()} alt={project.title.clone()} loading="lazy" />
                        },
                        None => html! { <div class="project-card__image project-card__image--empty" /> },
                    }
                }
                <div class="project-card__body">
                    <span class="project-card__category">{ project.category.clone() }</span>
                    <h3 class="project-card__title">{ project.title.clone() }</h3>
                    <p class="project-card__description">{ project.description.clone() }</p>
                    <ul class="tags">
                        { for project.technologies.iter().map(|tech| html! { <li class="tag">{ tech.clone() }</li> }) }
                    </ul>
                </div>
            </a>
        </article>
    }
}
