//! Reusable card component for gallery entries.

use leptos::prelude::*;

use crate::net::types::Game;

/// A single game card in the gallery grid.
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    view! {
        <div class="game-card">
            <h3>{game.name}</h3>
            <span class="game-card__console">{game.console}</span>
            <p class="game-card__year">{format!("Released: {}", game.year)}</p>
            <p class="game-card__description">{game.description}</p>
        </div>
    }
}
