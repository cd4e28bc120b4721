use poetry_front::{config, App};
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    if let Some(raw) = config::rejected_log_level() {
        log::warn!("Unknown log level {:?}, using {}", raw, config::log_level());
    }
    log::info!("Serving from base {}", config::base_url().unwrap_or("/"));

    Renderer::<App>::new().render();
}
