#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use crate::net::types::Game;

/// Filter value selecting every console.
pub const ALL_CONSOLES: &str = "all";

/// Sort order for the gallery.
///
/// The page starts in catalogue (insertion) order; the sort button then
/// toggles between year and name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Insertion,
    Year,
    Name,
}

impl SortKey {
    /// The next order when the sort button is pressed. The first press
    /// sorts by year; after that the button alternates year ↔ name.
    pub fn toggled(self) -> Self {
        match self {
            Self::Insertion | Self::Name => Self::Year,
            Self::Year => Self::Name,
        }
    }

    /// Label for the sort button — it names the order the next press
    /// switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Year => "Sort by Name",
            Self::Insertion | Self::Name => "Sort by Year",
        }
    }
}

/// Distinct console labels in first-seen catalogue order, for the filter
/// dropdown.
pub fn console_options(games: &[Game]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for game in games {
        if !options.iter().any(|c| c == &game.console) {
            options.push(game.console.clone());
        }
    }
    options
}

/// The games visible for a given filter and sort order.
///
/// Filtering matches the console label exactly (or everything for
/// [`ALL_CONSOLES`]). Year sort breaks ties by case-insensitive name;
/// name sort is case-insensitive lexicographic.
pub fn visible_games(games: &[Game], console: &str, sort: SortKey) -> Vec<Game> {
    let mut visible: Vec<Game> = games
        .iter()
        .filter(|g| console == ALL_CONSOLES || g.console == console)
        .cloned()
        .collect();

    match sort {
        SortKey::Insertion => {}
        SortKey::Year => {
            visible.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| name_key(a).cmp(&name_key(b))));
        }
        SortKey::Name => visible.sort_by_key(name_key),
    }

    visible
}

fn name_key(game: &Game) -> String {
    game.name.to_lowercase()
}
