mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

pub use infrastructure::logging::init_logging;
pub use infrastructure::settings::Settings;
pub use server::{app, serve};
