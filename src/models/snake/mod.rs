pub mod snake_config;
pub mod snake_game;
