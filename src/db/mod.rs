pub mod catalog_repo;
pub mod game_repo;
pub mod models;
pub mod seed;
pub mod target_repo;
pub mod user_repo;
