//! Landing page with links into the portal's sections.

use leptos::prelude::*;

/// Home page — a short welcome and pointers to the interactive pages.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Hyrule Portal"</h1>
            <p class="home-page__tagline">
                "A fan-made guide to the Legend of Zelda series."
            </p>
            <div class="home-page__links">
                <a class="home-card" href="/games">
                    <h2>"Game Gallery"</h2>
                    <p>"Browse every mainline release, filter by console, sort by year or name."</p>
                </a>
                <a class="home-card" href="/tutorial">
                    <h2>"Snowpeak Ruins Guide"</h2>
                    <p>"A step-by-step walkthrough of the ice block puzzle. Your progress is saved."</p>
                </a>
                <a class="home-card" href="/contact">
                    <h2>"Contact"</h2>
                    <p>"Questions, corrections, or just want to say hi? Drop us a line."</p>
                </a>
            </div>
        </div>
    }
}
