use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use crate::catalog::{self, ProjectId, ProjectRecord};
use crate::showcase::{
    CardPreview, MediaDirective, OverlayMedia, OverlayPhase, ScrollEdge, ScrollLatch, Selection,
};

fn apply_directive(video_ref: &NodeRef, directive: Option<MediaDirective>) {
    let Some(directive) = directive else { return };
    let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
        return;
    };

    match directive {
        MediaDirective::Play { from_start, looping } => {
            video.set_loop(looping);
            video.set_muted(true);
            if from_start {
                video.set_current_time(0.0);
            }
            // Playback start may be rejected (autoplay policy, rapid hover
            // toggling); the rejection is awaited and discarded.
            if let Ok(promise) = video.play() {
                spawn_local(async move {
                    let _ = JsFuture::from(promise).await;
                });
            }
        }
        MediaDirective::Halt { rewind } => {
            let _ = video.pause();
            if rewind {
                video.set_current_time(0.0);
            }
        }
    }
}

fn apply_scroll_edge(edge: ScrollEdge) {
    let Some(style) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.style())
    else {
        return;
    };

    match edge {
        ScrollEdge::Engage => {
            let _ = style.set_property("overflow", "hidden");
        }
        ScrollEdge::Release => {
            let _ = style.remove_property("overflow");
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    record: &'static ProjectRecord,
    on_select: Callback<Option<ProjectId>>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let record = props.record;
    let preview = use_state(|| CardPreview::new(record.video.is_some()));
    let video_ref = use_node_ref();

    let onmouseenter = {
        let preview = preview.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*preview).clone();
            apply_directive(&video_ref, next.pointer_enter());
            preview.set(next);
        })
    };

    let onmouseleave = {
        let preview = preview.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*preview).clone();
            apply_directive(&video_ref, next.pointer_leave());
            preview.set(next);
        })
    };

    let onclick = {
        let on_select = props.on_select.clone();
        let id = record.id;
        Callback::from(move |_: MouseEvent| on_select.emit(Some(id)))
    };

    let card_class = classes!(
        "project-card",
        preview.zoom_on_hover().then_some("zoom-hover"),
        preview.video_visible().then_some("video-active"),
    );

    html! {
        <article class={card_class} {onclick} {onmouseenter} {onmouseleave}>
            <div class="card-chrome" aria-hidden="true">
                <span class="chrome-dot"></span>
                <span class="chrome-dot"></span>
                <span class="chrome-dot"></span>
            </div>
            <div class="card-media">
                <img class="card-image" src={record.image} alt={record.title} loading="lazy" />
                { record.video.map(|src| html! {
                    <video
                        ref={video_ref.clone()}
                        class="card-video"
                        src={src}
                        muted={true}
                        playsinline={true}
                        preload="auto"
                    />
                }) }
            </div>
            <div class="card-body">
                <h3 class="card-title">{record.title}</h3>
                <p class="card-short">{record.short_description}</p>
                <div class="tech-row">
                    { for record.tech.iter().take(3).map(|tech| html! {
                        <span class="tech-chip">{*tech}</span>
                    }) }
                    { (record.tech.len() > 3).then(|| html! {
                        <span class="tech-more">{format!("+{}", record.tech.len() - 3)}</span>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectOverlayProps {
    record: &'static ProjectRecord,
    on_select: Callback<Option<ProjectId>>,
}

#[function_component(ProjectOverlay)]
fn project_overlay(props: &ProjectOverlayProps) -> Html {
    let record = props.record;
    let media = use_state(|| OverlayMedia::new(record.video.is_some()));
    let hovering_media = use_state(|| false);
    let video_ref = use_node_ref();

    {
        // Fire the one-shot autoplay once the media element is in the tree.
        let media = media.clone();
        let video_ref = video_ref.clone();
        use_effect_with((), move |_| {
            apply_directive(&video_ref, media.mount_directive());
            || ()
        });
    }

    let onended = {
        let media = media.clone();
        Callback::from(move |_: Event| {
            let mut next = (*media).clone();
            next.video_ended();
            media.set(next);
        })
    };

    let on_media_enter = {
        let media = media.clone();
        let hovering_media = hovering_media.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            apply_directive(&video_ref, media.pointer_enter());
            hovering_media.set(true);
        })
    };

    let on_media_leave = {
        let media = media.clone();
        let hovering_media = hovering_media.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            apply_directive(&video_ref, media.pointer_leave());
            hovering_media.set(false);
        })
    };

    let on_close = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_select.emit(None);
        })
    };

    let on_scrim_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(None))
    };

    // Clicks inside the panel must never reach the scrim's close handler.
    let contain_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    let media_class = classes!(
        "overlay-media",
        match media.phase() {
            OverlayPhase::Autoplaying => "phase-autoplay",
            OverlayPhase::HoverLoop => "phase-hover-loop",
            OverlayPhase::ImageOnly => "phase-image-only",
        },
    );
    let video_class = classes!(
        "overlay-video",
        media
            .video_layer_visible(*hovering_media)
            .then_some("is-visible"),
    );

    html! {
        <div class="overlay-root" role="dialog" aria-modal="true" aria-label={record.title}>
            <div class="overlay-scrim" onclick={on_scrim_click}></div>
            <div class="overlay-panel" onclick={contain_click}>
                <button
                    class="overlay-close"
                    type="button"
                    aria-label="Close project details"
                    onclick={on_close}
                >
                    {"✕"}
                </button>
                <div class={media_class} onmouseenter={on_media_enter} onmouseleave={on_media_leave}>
                    <img class="overlay-image" src={record.image} alt={record.title} />
                    { record.video.map(|src| html! {
                        <video
                            ref={video_ref.clone()}
                            class={video_class.clone()}
                            src={src}
                            muted={true}
                            playsinline={true}
                            preload="auto"
                            onended={onended.clone()}
                        />
                    }) }
                    { media.has_played_once().then(|| html! {
                        <span class="replay-hint">{"Hover to replay"}</span>
                    }) }
                </div>
                <div class="overlay-body">
                    <header class="overlay-header">
                        <div>
                            <h2 class="overlay-title">{record.title}</h2>
                            <p class="overlay-short">{record.short_description}</p>
                        </div>
                        <div class="overlay-actions">
                            { record.link.map(|href| html! {
                                <a
                                    class="action-primary"
                                    href={href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"View project ↗"}
                                </a>
                            }) }
                            { record.video.map(|href| html! {
                                <a
                                    class="action-secondary"
                                    href={href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"Watch demo"}
                                </a>
                            }) }
                        </div>
                    </header>
                    <div class="overlay-columns">
                        <div class="overlay-story">
                            <h4 class="overlay-label">{"The story"}</h4>
                            <p>{record.description}</p>
                        </div>
                        <div class="overlay-stack">
                            <h4 class="overlay-label">{"Tech stack"}</h4>
                            <div class="tech-row">
                                { for record.tech.iter().map(|tech| html! {
                                    <span class="tech-chip">{*tech}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let selection = use_state(Selection::default);
    let scroll_latch = use_mut_ref(ScrollLatch::new);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |id: Option<ProjectId>| {
            let mut next = (*selection).clone();
            next.select(id);
            selection.set(next);
        })
    };

    // An id that does not resolve renders no overlay and locks nothing.
    let resolved = selection.current().and_then(catalog::find);
    let overlay_open = resolved.is_some();

    {
        // Scoped acquire/release keyed to "overlay open": an id-to-id change
        // keeps the dependency true so the lock never flickers, and the
        // effect destructor releases on teardown no matter how the overlay
        // went away.
        let latch = scroll_latch.clone();
        use_effect_with(overlay_open, move |open| {
            if let Some(edge) = latch.borrow_mut().sync(*open) {
                apply_scroll_edge(edge);
            }
            move || {
                if let Some(edge) = latch.borrow_mut().release() {
                    apply_scroll_edge(edge);
                }
            }
        });
    }

    {
        let on_select = on_select.clone();
        use_effect_with(overlay_open, move |open| {
            let listener = (*open).then(|| {
                let closure =
                    Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" {
                            on_select.emit(None);
                        }
                    });
                if let Some(win) = window() {
                    let _ = win.add_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                closure
            });
            move || {
                if let Some(closure) = listener {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    html! {
        <section id="projects" class="section-block projects" aria-labelledby="projects-heading">
            <div class="section-intro">
                <div>
                    <p class="section-kicker">{"Portfolio"}</p>
                    <h2 id="projects-heading" class="section-heading">{"Selected projects"}</h2>
                </div>
                <p class="section-aside">
                    {"A collection of technical challenges and real business solutions."}
                </p>
            </div>
            <div class="project-grid">
                { for catalog::all().iter().map(|record| html! {
                    <ProjectCard key={record.id} record={record} on_select={on_select.clone()} />
                }) }
            </div>
            // Keyed so a direct id-to-id selection change remounts the
            // overlay and resets its playback state.
            { resolved.map(|record| html! {
                <ProjectOverlay key={record.id} record={record} on_select={on_select.clone()} />
            }) }
        </section>
    }
}
