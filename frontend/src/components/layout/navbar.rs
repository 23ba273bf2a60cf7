use yew::prelude::*;

use crate::config::OWNER_NAME;
use crate::routes::Page;

const LINKS: [(&str, Page); 4] = [
    ("Home", Page::Home),
    ("About", Page::About),
    ("Projects", Page::Projects),
    ("Contact", Page::Contact),
];

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub current: Page,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let open = use_state(|| false);
    let section = props.current.section();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*open).then_some("navbar--open"))}>
            <a class="navbar__brand" href={Page::Home.to_hash()}>{ OWNER_NAME }</a>
            <button class="navbar__toggle" aria-label="Toggle menu" onclick={toggle}>{"☰"}</button>
            <ul class="navbar__links">
                {
                    for LINKS.iter().map(|(label, page)| {
                        let active = section.as_ref() == Some(page);
                        html! {
                            <li>
                                <a
                                    class={classes!("navbar__link", active.then_some("navbar__link--active"))}
                                    href={page.to_hash()}
                                    onclick={close.clone()}
                                >
                                    { *label }
                                </a>
                            </li>
                        }
                    })
                }
            </ul>
        </nav>
    }
}
