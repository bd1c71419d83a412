use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

const EMAIL: &str = "hello@adrianvega.dev";
const COPIED_BADGE_MS: u32 = 2_000;
const FAKE_SEND_MS: u32 = 1_500;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormPhase {
    Idle,
    Sending,
    Sent,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(win) = window() else { return };
            let promise = win.navigator().clipboard().write_text(EMAIL);
            let copied = copied.clone();
            spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    copied.set(true);
                    TimeoutFuture::new(COPIED_BADGE_MS).await;
                    copied.set(false);
                }
            });
        })
    };

    html! {
        <section id="contact" class="section-block contact" aria-labelledby="contact-heading">
            <div class="contact-grid">
                <div class="contact-info">
                    <h2 id="contact-heading" class="contact-heading">{"Let's talk."}</h2>
                    <p class="contact-copy">
                        {"A bit shy at first, but always glad to talk through new \
                        challenges, business ideas or just technology."}
                    </p>
                    <div class="contact-channels">
                        <div>
                            <span class="contact-label">{"Email"}</span>
                            <div class="contact-email-row">
                                <a class="contact-email" href={format!("mailto:{EMAIL}")}>
                                    {EMAIL}
                                </a>
                                <button
                                    class="copy-button"
                                    type="button"
                                    title="Copy email"
                                    aria-label="Copy email address"
                                    onclick={on_copy}
                                >
                                    { if *copied { "✓" } else { "⧉" } }
                                </button>
                            </div>
                        </div>
                        <div>
                            <span class="contact-label">{"Social"}</span>
                            <div class="contact-socials">
                                <a
                                    href="https://github.com/adrianvega-dev"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"GitHub ↗"}
                                </a>
                                <a
                                    href="https://www.linkedin.com/in/adrian-vega-dev"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"LinkedIn ↗"}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let phase = use_state(|| FormPhase::Idle);

    let onsubmit = {
        let phase = phase.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *phase == FormPhase::Sending {
                return;
            }
            phase.set(FormPhase::Sending);
            let phase = phase.clone();
            // Submission is simulated; nothing leaves the page.
            spawn_local(async move {
                TimeoutFuture::new(FAKE_SEND_MS).await;
                phase.set(FormPhase::Sent);
            });
        })
    };

    let on_reset = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(FormPhase::Idle))
    };

    if *phase == FormPhase::Sent {
        return html! {
            <div class="form-card">
                <div class="form-success">
                    <span class="success-badge" aria-hidden="true">{"✓"}</span>
                    <h3>{"Message sent"}</h3>
                    <p>{"Thanks for reaching out. I'll reply as soon as I can."}</p>
                    <button class="form-again" type="button" onclick={on_reset}>
                        {"Send another message"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="form-card">
            <form class="contact-form" {onsubmit}>
                <div class="form-field">
                    <label for="contact-name">{"Your name"}</label>
                    <input id="contact-name" name="name" type="text" required={true} placeholder="Jane Doe" />
                </div>
                <div class="form-field">
                    <label for="contact-email">{"Email"}</label>
                    <input id="contact-email" name="email" type="email" required={true} placeholder="jane@example.com" />
                </div>
                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="4"
                        required={true}
                        placeholder="Tell me about your project..."
                    />
                </div>
                <button class="form-submit" type="submit" disabled={*phase == FormPhase::Sending}>
                    { if *phase == FormPhase::Sending { "Sending..." } else { "Send message" } }
                </button>
            </form>
        </div>
    }
}
