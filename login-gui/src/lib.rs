pub mod app;
pub mod args;
pub mod auth;
pub mod config;
pub mod logger;
pub mod state;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
