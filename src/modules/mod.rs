pub mod game;
pub mod genre;
pub mod platform;
