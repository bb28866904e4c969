use clap::Parser;
use wasm_bindgen::prelude::*;

pub use game::{GameProps, GameView};
pub use messages::{CatalogError, load_catalog, parse_catalog};

mod game;
mod messages;
mod settings;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameProps,
}

/// Entry point, arguments are read from the URL hash, e.g. `#-vv&--seed=42&--count=5`.
#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let Some(root) = document().get_element_by_id("game") else {
        log::warn!("no id=\"game\" element, nothing to mount");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<GameView>::with_root_and_props(root, args.game).render();
}
