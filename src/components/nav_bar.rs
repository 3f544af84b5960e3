//! Site navigation bar with a responsive mobile toggle.

use leptos::prelude::*;

/// Top navigation bar.
///
/// On small screens the menu collapses behind a hamburger toggle; choosing
/// a link closes it again.
#[component]
pub fn NavBar() -> impl IntoView {
    let open = RwSignal::new(false);
    let close = move |_| open.set(false);

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/" on:click=close>
                "Hyrule Portal"
            </a>
            <button
                class="navbar__toggle"
                class:active=move || open.get()
                aria-label="Toggle navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
            </button>
            <ul class="navbar__menu" class:active=move || open.get()>
                <li>
                    <a href="/" on:click=close>
                        "Home"
                    </a>
                </li>
                <li>
                    <a href="/games" on:click=close>
                        "Games"
                    </a>
                </li>
                <li>
                    <a href="/tutorial" on:click=close>
                        "Puzzle Guide"
                    </a>
                </li>
                <li>
                    <a href="/contact" on:click=close>
                        "Contact"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
