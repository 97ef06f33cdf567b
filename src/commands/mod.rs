pub mod config;
pub mod event;
pub mod open;
pub mod show;
