//! Game gallery page with console filter and year/name sort.

use leptos::prelude::*;

use crate::components::game_card::GameCard;
use crate::net::types::Game;
use crate::state::games::{ALL_CONSOLES, SortKey, console_options, visible_games};

/// Gallery page — loads the catalogue and renders the filterable,
/// sortable card grid. Shows a spinner while loading and an error panel
/// if the catalogue cannot be fetched.
#[component]
pub fn GamesPage() -> impl IntoView {
    let games = LocalResource::new(|| crate::net::api::fetch_games());

    view! {
        <div class="games-page">
            <h1>"Game Gallery"</h1>
            <Suspense fallback=move || {
                view! { <div class="spinner">"Loading games..."</div> }
            }>
                {move || {
                    games
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <GamesBrowser games=list/> }.into_any(),
                            Err(_) => {
                                view! {
                                    <div class="error-message">
                                        <p>"Failed to load games. Please try again later."</p>
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

/// Filter bar and card grid over a loaded catalogue.
#[component]
fn GamesBrowser(games: Vec<Game>) -> impl IntoView {
    let games = StoredValue::new(games);
    let console = RwSignal::new(ALL_CONSOLES.to_owned());
    let sort = RwSignal::new(SortKey::default());

    let options = games.with_value(|g| console_options(g));
    let visible = move || games.with_value(|g| visible_games(g, &console.get(), sort.get()));

    view! {
        <div class="games-page__controls">
            <label>
                "Console:"
                <select
                    prop:value=move || console.get()
                    on:change=move |ev| console.set(event_target_value(&ev))
                >
                    <option value=ALL_CONSOLES>"All consoles"</option>
                    {options
                        .into_iter()
                        .map(|c| {
                            let value = c.clone();
                            view! { <option value=value>{c}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <button class="btn" on:click=move |_| sort.update(|s| *s = s.toggled())>
                {move || sort.get().button_label()}
            </button>
        </div>

        {move || {
            let list = visible();
            if list.is_empty() {
                view! {
                    <div class="games-page__grid">
                        <p class="games-page__empty">"No games found matching your criteria."</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="games-page__grid">
                        {list
                            .into_iter()
                            .map(|game| view! { <GameCard game=game/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
