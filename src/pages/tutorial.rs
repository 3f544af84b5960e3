//! Guided puzzle tutorial page.
//!
//! The step list is fetched from a static JSON document; until it arrives
//! the page shows a loading indicator and accepts no navigation input. Once
//! loaded, a [`StepNavigator`] signal drives the whole view: active step,
//! progress bar, button enablement, and the gating warning panel. After
//! every navigation the zero-based index is persisted to localStorage and
//! the one-based `step` query parameter is pushed into the URL; both writes
//! are best-effort and never block the visible change.

use leptos::prelude::*;

use crate::components::step_card::StepCard;
use crate::components::warning_panel::WarningPanel;
use crate::net::types::Step;
use crate::state::tutorial::{PROGRESS_KEY, STEP_PARAM, StepNavigator};
use crate::util::{storage, url_params};

/// Tutorial page shell — resolves the step document, then hands off to the
/// interactive viewer.
#[component]
pub fn TutorialPage() -> impl IntoView {
    let steps = LocalResource::new(|| crate::net::api::fetch_tutorial_steps());

    view! {
        <div class="tutorial-page">
            <h1>"Snowpeak Ruins: Ice Block Puzzle"</h1>
            <Suspense fallback=move || {
                view! { <div class="spinner">"Loading tutorial..."</div> }
            }>
                {move || {
                    steps
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <TutorialViewer steps=list/> }.into_any(),
                            Err(_) => {
                                view! {
                                    <div class="error-message">
                                        <p>"Failed to load tutorial steps. Please try again later."</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Mirror the navigator into its two durable carriers: persisted storage
/// (zero-based) and the URL `step` parameter (one-based).
fn sync_progress(nav: &StepNavigator) {
    storage::save(PROGRESS_KEY, &nav.current());
    url_params::set(STEP_PARAM, &(nav.current() + 1).to_string());
}

/// Interactive step viewer over a loaded step list.
#[component]
fn TutorialViewer(steps: Vec<Step>) -> impl IntoView {
    let total = steps.len();
    let nav = RwSignal::new(StepNavigator::new(
        steps,
        url_params::get(STEP_PARAM).as_deref(),
        storage::load::<usize>(PROGRESS_KEY),
    ));
    let url_display = RwSignal::new(String::new());
    let show_reset = RwSignal::new(false);
    let show_share = RwSignal::new(false);

    // The resolved index may differ from both carriers; align them now.
    nav.with_untracked(sync_progress);
    url_display.set(url_params::display_url());

    let go = move |forward: bool| {
        nav.update(|n| {
            if forward {
                n.advance();
            } else {
                n.retreat();
            }
        });
        nav.with_untracked(sync_progress);
        url_display.set(url_params::display_url());
    };

    let on_confirm_reset = Callback::new(move |()| {
        nav.update(|n| {
            n.reset();
        });
        // Reset clears the saved entry outright; it must be absent, not 0.
        storage::remove(PROGRESS_KEY);
        url_params::set(STEP_PARAM, "1");
        url_display.set(url_params::display_url());
        show_reset.set(false);
    });

    let on_share = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let href = web_sys::window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_default();
                if !crate::util::clipboard::copy_text(&href).await {
                    log::warn!("share: clipboard copy failed");
                }
                show_share.set(true);
            });
        }
    };

    // Arrow keys navigate; the listener is removed with the page.
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
            "ArrowLeft" => go(false),
            "ArrowRight" => go(true),
            _ => {}
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="tutorial-viewer">
            <div class="progress">
                <div
                    class="progress__fill"
                    style:width=move || format!("{}%", nav.with(StepNavigator::progress_percent))
                ></div>
            </div>
            <p class="tutorial-viewer__counter">
                {move || format!("Step {} of {total}", nav.with(StepNavigator::current) + 1)}
            </p>

            <Show when=move || nav.with(StepNavigator::warning_visible)>
                <WarningPanel/>
            </Show>

            {move || nav.with(|n| n.step().cloned()).map(|step| view! { <StepCard step=step/> })}

            <div class="tutorial-viewer__controls">
                <button
                    class="btn"
                    disabled=move || nav.with(StepNavigator::at_first)
                    on:click=move |_| go(false)
                >
                    "\u{2190} Previous"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || nav.with(StepNavigator::at_last)
                    on:click=move |_| go(true)
                >
                    "Next \u{2192}"
                </button>
            </div>

            <div class="tutorial-viewer__footer">
                <span class="tutorial-viewer__url">{move || url_display.get()}</span>
                <button class="btn" on:click=on_share>
                    "Share this step"
                </button>
                <button class="btn btn--danger" on:click=move |_| show_reset.set(true)>
                    "Reset progress"
                </button>
            </div>

            <Show when=move || show_reset.get()>
                <ResetDialog
                    on_confirm=on_confirm_reset
                    on_cancel=Callback::new(move |()| show_reset.set(false))
                />
            </Show>

            <Show when=move || show_share.get()>
                <ShareDialog on_close=Callback::new(move |()| show_share.set(false))/>
            </Show>
        </div>
    }
}

/// Confirmation dialog for clearing saved progress.
#[component]
fn ResetDialog(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"\u{26a0}\u{fe0f} Reset Progress?"</h3>
                <p>"Are you sure you want to reset your progress? You will return to Step 1."</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Yes, Reset"
                    </button>
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog shown after the page URL is copied.
#[component]
fn ShareDialog(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"Link copied!"</h3>
                <p>"The link to this step is on your clipboard. Share away!"</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
