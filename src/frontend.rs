use js_sys::Date;
use web_sys::window;
use yew::prelude::*;

mod about;
mod contact;
mod hero;
mod projects;

use about::About;
use contact::Contact;
use hero::Hero;
use projects::Projects;

#[function_component(App)]
fn app() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <>
            <nav class="site-nav" aria-label="Primary">
                <a class="nav-brand" href="#hero">{"AV.DEV"}</a>
                <div class="nav-links">
                    <a href="#about">{"Who I am"}</a>
                    <a href="#projects">{"Projects"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
            </nav>

            <main>
                <Hero />
                <About />
                <Projects />
                <Contact />
            </main>

            <footer class="site-footer">
                <p>{format!("Adrián Vega © {year}")}</p>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
