//! Todo Client Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod filter;
mod models;
mod store;
mod timer;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("[APP] Starting with API {} for user {}", config.api_base_url, config.user_id);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
