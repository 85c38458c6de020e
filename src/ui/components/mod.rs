pub mod menu;
pub mod progress_bar;
pub mod prompt_card;
