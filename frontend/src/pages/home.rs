//! Landing page: hero and featured projects.

use common::model::project::ProjectRecord;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::projects::ProjectCard;
use crate::config::{GITHUB_URL, LINKEDIN_URL, OWNER_NAME};
use crate::routes::Page;
use crate::services::project_store;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured = use_state(|| None::<Vec<ProjectRecord>>);

    {
        let featured = featured.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                featured.set(Some(project_store::list_featured().await));
            });
        });
    }

    html! {
        <>
            <section class="hero">
                <span class="hero__greeting">{"Hello, my name is"}</span>
                <h1 class="hero__name">{ OWNER_NAME }</h1>
                <h2 class="hero__tagline">{"I build websites, web apps and responsive UIs."}</h2>
                <p class="hero__summary">
                    {"Frontend developer with 3 years of experience building web apps using React, Next.js, Tailwind CSS, and TanStack Query. Strong grasp of UI/UX principles and performance-focused development."}
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href={Page::Projects.to_hash()}>{"View My Work"}</a>
                    <a class="btn btn--outline" href={Page::Contact.to_hash()}>{"Contact Me"}</a>
                </div>
                <div class="hero__social">
                    <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                </div>
            </section>

            <section class="featured">
                <h2 class="section-heading">{"Featured Projects"}</h2>
                {
                    match &*featured {
                        None => html! { <p class="loading">{"Loading projects..."}</p> },
                        Some(projects) => html! {
                            <div class="project-grid">
                                { for projects.iter().map(|project| html! {
                                    <ProjectCard key={project.id.clone()} project={project.clone()} />
                                }) }
                            </div>
                        },
                    }
                }
                <a class="btn btn--outline" href={Page::Projects.to_hash()}>{"View All Projects"}</a>
            </section>
        </>
    }
}
