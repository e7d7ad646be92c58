//! Effects configuration embedded in `index.html`.
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "starfield": { "count": 60 }, "particles": { "count": 12 } }
//! </script>
//! ```
//!
//! The block is optional. A missing block means defaults; an invalid one is
//! logged and also falls back to defaults so a bad edit never blanks the page.

use lib_core::config::EffectsConfig;
use web_sys::window;

use super::constants::CONFIG_SCRIPT_ID;

pub fn load_effects_config() -> EffectsConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|script| script.text_content());

    match raw {
        Some(json) => parse_or_default(&json),
        None => {
            log::debug!("No #{} block, using default effects config", CONFIG_SCRIPT_ID);
            EffectsConfig::default()
        }
    }
}

fn parse_or_default(json: &str) -> EffectsConfig {
    if json.trim().is_empty() {
        return EffectsConfig::default();
    }
    match EffectsConfig::from_json(json) {
        Ok(config) => {
            log::info!("Loaded effects config from #{}", CONFIG_SCRIPT_ID);
            config
        }
        Err(err) => {
            log::warn!("Ignoring embedded effects config: {}", err);
            EffectsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_block_falls_back() {
        let config = parse_or_default(r#"{ "particles": { "count": 0 } }"#);
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn test_blank_block_is_default() {
        assert_eq!(parse_or_default("  \n "), EffectsConfig::default());
    }

    #[test]
    fn test_valid_block_applies() {
        let config = parse_or_default(r#"{ "typewriter": { "tick_ms": 60 } }"#);
        assert_eq!(config.typewriter.tick_ms, 60);
        assert_eq!(config.typewriter.text, EffectsConfig::default().typewriter.text);
    }
}
