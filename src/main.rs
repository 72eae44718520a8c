//! Cheque Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod desk;
mod error;
mod format;
mod forms;
mod logger;
mod models;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::load();
    logger::init(config.log_level);
    log::info!(target: "app", "Backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
