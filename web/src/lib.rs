use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Arguments are taken from the location hash, e.g. `#-vv&--seed=42&--symbols=🍎,🍐,🍋`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']).map(decode_component))
    }
}

/// Browsers hand out the hash percent-encoded, each `&` separated piece is decoded on its own.
#[cfg(target_arch = "wasm32")]
fn decode_component(piece: &str) -> String {
    js_sys::decode_uri_component(piece)
        .map(String::from)
        .unwrap_or_else(|_| {
            log::warn!("could not decode {:?}, using it as is", piece);
            piece.to_string()
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn decode_component(piece: &str) -> String {
    piece.to_string()
}

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

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
