// ============================================================================
// RESTAURANT WEB - Browser-side controllers (Rust + WASM, MVVM)
// ============================================================================
// - Models: data exchanged with the server
// - Services: HTTP only
// - ViewModels: UI state + logic, no DOM
// - Views: markup from data, display state onto the DOM
// - Controllers: event binding and async orchestration, one per page
// ============================================================================

pub mod app;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
// Also compiled into build.rs
#[cfg(test)]
mod env_file;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use error::{ClientError, ErrorKind};

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Restaurant web client starting");

    dom::on_dom_ready(app::mount_all)
}
