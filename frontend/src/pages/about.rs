use yew::prelude::*;

use crate::config::{OWNER_NAME, OWNER_ROLE};
use crate::routes::Page;

const SKILLS: [(&str, &[&str]); 3] = [
    ("Frontend", &["HTML5", "CSS3", "JavaScript", "TypeScript", "React", "Next.js"]),
    ("Styling", &["Tailwind CSS", "Sass", "Styled Components", "Framer Motion"]),
    ("Tooling", &["Git", "Vite", "Redux Toolkit", "TanStack Query", "Figma"]),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="about">
            <h1 class="section-heading">{"About Me"}</h1>
            <div class="about__intro">
                <h2>{ OWNER_NAME }</h2>
                <span class="about__role">{ OWNER_ROLE }</span>
                <p>
                    {"Skilled frontend developer with hands-on experience turning designs into fast, accessible and responsive interfaces. I care about clean component architecture, smooth interactions and code that stays easy to change."}
                </p>
            </div>

            <div class="skills">
                { for SKILLS.iter().map(|(group, items)| html! {
                    <div class="skills__group">
                        <h3>{ *group }</h3>
                        <ul class="tags">
                            { for items.iter().map(|item| html! { <li class="tag">{ *item }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>

            <a class="btn btn--primary" href={Page::Contact.to_hash()}>{"Get In Touch"}</a>
        </section>
    }
}
