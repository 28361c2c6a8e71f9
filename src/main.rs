//! Wishlist Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod forms;
mod host;
mod list_ops;
mod messages;
mod models;
mod screen;
mod session;
mod store;
mod toast;
mod validation;

use app::{App, ConfigErrorView};
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::{init_logger, DEFAULT_CAPACITY};

fn main() {
    console_error_panic_hook::set_once();

    match AppConfig::from_env(config::page_origin()) {
        Ok(config) => {
            if let Err(e) = init_logger(config.log_level, DEFAULT_CAPACITY) {
                web_sys::console::error_1(&format!("[App] logger init failed: {}", e).into());
            }
            log::info!("[App] starting against {}", config.api_base);
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            let _ = init_logger(LevelFilter::Info, DEFAULT_CAPACITY);
            log::error!("[App] invalid configuration: {}", e);
            let detail = e.to_string();
            mount_to_body(move || view! { <ConfigErrorView detail=detail /> });
        }
    }
}
