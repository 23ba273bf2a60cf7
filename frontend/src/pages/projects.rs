use yew::prelude::*;

use crate::components::projects::ProjectList;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    html! {
        <section class="projects">
            <h1 class="section-heading">{"My Projects"}</h1>
            <p class="lead">{"A selection of work I have designed and built."}</p>
            <ProjectList />
        </section>
    }
}
