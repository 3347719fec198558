pub mod board;
pub mod game_over;
pub mod menu;
