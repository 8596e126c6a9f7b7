use podscraper_frontend::{logging, App};

fn main() {
    let level = logging::level_from_env();

    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialize the logger: {err}");
    }

    tracing::info!("starting podscraper at log level {level}");
    dioxus::launch(App);
}
