//! Browser logging. `tracing` events go to the devtools console and panics
//! are reported there instead of aborting silently.

use tracing::Level;

const DEFAULT_LEVEL: Level = Level::INFO;

/// Maximum level, baked in from `USERADMIN_WEB_LOG_LEVEL` at build time.
pub fn max_level() -> Level {
    parse_level(option_env!("USERADMIN_WEB_LOG_LEVEL"))
}

fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the console subscriber and panic hook. Call once, before mounting.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(max_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing::Level;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
    }

    #[test]
    fn unset_or_unknown_level_falls_back_to_info() {
        assert_eq!(parse_level(None), Level::INFO);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_level(Some("")), Level::INFO);
    }
}
