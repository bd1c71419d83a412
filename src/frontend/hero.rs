use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero" aria-labelledby="hero-heading">
            <div class="hero-inner">
                <div class="hero-portrait" aria-hidden="true">{"AV"}</div>
                <div class="hero-kicker-row" aria-hidden="true">
                    <span class="kicker-rule"></span>
                    <span class="section-kicker">{"Backend architecture"}</span>
                    <span class="kicker-rule"></span>
                </div>
                <h1 id="hero-heading" class="hero-name">{"Adrián Vega"}</h1>
                <p class="hero-tagline">
                    {"I turn complexity into efficient systems."}
                    <br />
                    {"Business logic and ecosystems that scale."}
                </p>
                <div class="social-row">
                    <a
                        class="social-link"
                        href="https://github.com/adrianvega-dev"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub profile"
                    >
                        {"GitHub"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                    <a
                        class="social-link"
                        href="https://www.linkedin.com/in/adrian-vega-dev"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn profile"
                    >
                        {"LinkedIn"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                    <a class="social-link" href="mailto:hello@adrianvega.dev" aria-label="Email">
                        {"Email"}
                        <span class="external-mark" aria-hidden="true">{"✉"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
