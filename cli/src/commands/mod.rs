pub mod export;
pub mod render;
pub mod summary;
pub mod verify;
