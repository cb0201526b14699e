//! Terminal output formatting
//!
//! Gallows art, display utilities and pretty-printing for the console game.

pub mod art;
pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_catalog, print_category_menu, print_difficulty_menu,
    print_final_statistics, print_game_state, print_loss, print_round_intro,
    print_running_totals, print_simulation_result, print_win,
};
