//! Fetchers for the portal's data sources.
//!
//! Client-side (csr): the step list is a real HTTP fetch of a static JSON
//! document; the game catalogue is a hardcoded list behind an async call
//! with a simulated delay, standing in for a backend that does not exist.
//! Off the browser the fetchers return errors so pages degrade to their
//! error panels.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed or malformed load renders a
//! user-visible error panel instead of crashing; no retry is attempted.

#![allow(clippy::unused_async)]

use super::types::{Game, Step};
#[cfg(feature = "csr")]
use super::types::TutorialData;

/// Fetch the ordered tutorial step list from `data/tutorial-steps.json`.
///
/// # Errors
///
/// Returns an error string if the document is unreachable or malformed.
pub async fn fetch_tutorial_steps() -> Result<Vec<Step>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/data/tutorial-steps.json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("step document fetch failed: {}", resp.status()));
        }
        let data: TutorialData = resp.json().await.map_err(|e| e.to_string())?;
        Ok(data.steps)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the game catalogue.
///
/// There is no backend; this returns the built-in catalogue after a short
/// simulated delay so the gallery exercises its loading state.
///
/// # Errors
///
/// Returns an error string outside the browser.
pub async fn fetch_games() -> Result<Vec<Game>, String> {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
        Ok(games_catalogue())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// The built-in game catalogue, in release order of first appearance.
#[cfg(feature = "csr")]
fn games_catalogue() -> Vec<Game> {
    let entries: [(&str, &str, i32, &str); 11] = [
        (
            "The Legend of Zelda",
            "NES",
            1986,
            "The original adventure that started it all. Guide Link through Hyrule to rescue Princess Zelda.",
        ),
        (
            "Zelda II: The Adventure of Link",
            "NES",
            1987,
            "A unique side-scrolling adventure with RPG elements.",
        ),
        (
            "A Link to the Past",
            "SNES",
            1991,
            "A masterpiece featuring the Light and Dark Worlds of Hyrule.",
        ),
        (
            "Link's Awakening",
            "Switch",
            2019,
            "A charming remake of the Game Boy classic with beautiful art.",
        ),
        (
            "Ocarina of Time",
            "N64",
            1998,
            "The revolutionary 3D adventure that defined a generation.",
        ),
        (
            "Majora's Mask",
            "N64",
            2000,
            "A darker tale with time-traveling mechanics and memorable masks.",
        ),
        (
            "The Wind Waker",
            "GameCube",
            2002,
            "Sail the Great Sea in this cel-shaded oceanic adventure.",
        ),
        (
            "Twilight Princess",
            "Wii",
            2006,
            "A darker, more mature Zelda featuring wolf transformation abilities.",
        ),
        (
            "Skyward Sword",
            "Wii",
            2011,
            "The origin story of the Master Sword with motion controls.",
        ),
        (
            "Breath of the Wild",
            "Switch",
            2017,
            "Open-world masterpiece that redefined the series.",
        ),
        (
            "Tears of the Kingdom",
            "Switch",
            2023,
            "The epic sequel with crafting and sky exploration.",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, console, year, description)| Game {
            name: name.to_owned(),
            console: console.to_owned(),
            year,
            description: description.to_owned(),
        })
        .collect()
}
