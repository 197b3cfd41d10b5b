mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    utils::log::init();

    if let Err(err) = app::run_when_ready() {
        tracing::error!(%err, "startup failed");
    }
}
