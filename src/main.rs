mod app;
mod components;
mod hooks;
mod models;
mod navigation;
mod routes;
mod services;
mod stores;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🎓 Taleem LMS starting...");

    yew::Renderer::<App>::new().render();
}
