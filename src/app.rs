//! Root application component with routing and shared chrome.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{contact::ContactPage, games::GamesPage, home::HomePage, tutorial::TutorialPage};

/// Root application component.
///
/// Sets up client-side routing and renders the navigation bar above the
/// active page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="portal" href="/portal.css"/>
        <Title text="Hyrule Portal"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("games") view=GamesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("tutorial") view=TutorialPage/>
                </Routes>
            </main>
        </Router>
    }
}
