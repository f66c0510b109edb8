//! Main application entry point.

use starink_app::App;

fn main() {
    env_logger::init();
    log::info!("Starting StarInk");

    if let Err(err) = App::run() {
        log::error!("StarInk exited with error: {err}");
        std::process::exit(1);
    }
}
