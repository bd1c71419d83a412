use yew::prelude::*;

const SKILLS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Docker",
    "React",
    "SQL",
    "Shopify API",
    "AWS",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section-block about" aria-labelledby="about-heading">
            <p class="section-kicker">{"About me"}</p>
            <h2 id="about-heading" class="section-heading">
                {"More than code, I build "}
                <span class="muted">{"solutions"}</span>
                {"."}
            </h2>
            <div class="about-copy">
                <p>
                    {"My path started in 2022, almost out of necessity, when I took on \
                    digitalizing a logistics business. What began as tinkering with a \
                    storefront became an obsession with understanding how things work \
                    on the inside."}
                </p>
                <p>
                    {"That curiosity took me back to formal training, where \"make it \
                    run\" gave way to robust architecture. The Java and Spring Boot \
                    ecosystem is home for backend work, though I reach for React \
                    whenever a complete experience is the goal."}
                </p>
                <p>
                    {"I'm a calm, somewhat shy person, but put a technical problem or a \
                    process worth optimizing in front of me and I transform. I love \
                    learning, experimenting, and above all watching good software \
                    logic save a business real time and money."}
                </p>
            </div>
            <div class="skill-row">
                { for SKILLS.iter().map(|skill| html! {
                    <span class="skill-chip">{*skill}</span>
                }) }
            </div>
        </section>
    }
}
