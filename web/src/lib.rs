use clap::Parser;
use wasm_bindgen::prelude::*;

mod slot;
mod storage;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    slot: slot::SlotProps,
}

/// Arguments come from the location hash, e.g. `#-vv&--seed=42`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
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

    let args = parse_args(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args.slot);

    let root = document()
        .get_element_by_id("slot")
        .expect("Could not find id=\"slot\" element");

    log::debug!("App started");
    yew::Renderer::<slot::SlotView>::with_root_and_props(root, args.slot).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();
        assert_eq!(args.slot.seed, None);
        assert_eq!(args.slot.prize_url, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_overrides_seed_and_prize() {
        let args = parse_args("#-vv&--seed=42&--prize-url=gift.html").unwrap();
        assert_eq!(args.slot.seed, Some(42));
        assert_eq!(args.slot.prize_url.as_deref(), Some("gift.html"));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse_args("#--jackpot").is_err());
    }
}
