//! Reusable UI components shared across pages.

pub mod game_card;
pub mod nav_bar;
pub mod step_card;
pub mod warning_panel;
