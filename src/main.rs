use leptos::prelude::*;

use camp_dashboard::app::App;
use camp_dashboard::config::AppConfig;
use camp_dashboard::telemetry;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    telemetry::init(&config.log_level);
    if let Err(e) = loaded {
        log::warn!("Ignoring dashboard config override: {}", e);
    }
    log::info!("{} starting", config.title);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
