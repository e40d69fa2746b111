//! Build-time backend address with an optional runtime override. The runtime
//! config is read from `window.USERADMIN_CONFIG` (if present) so a static
//! deployment can point at another backend without rebuilding. The login page
//! can still change the address afterwards; that edit lives only in memory.

use useradmin::{config::DEFAULT_BASE_URL, views::format::parse_locale};

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Locale name such as `en_US`, used for timestamps.
    pub locale: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("USERADMIN_API_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self {
            api_base_url,
            locale: browser_locale().unwrap_or_else(|| "en_US".to_string()),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    locale: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.locale.and_then(|value| normalize_locale(&value)) {
        config.locale = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USERADMIN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        locale: read_runtime_value(&object, "locale"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn browser_locale() -> Option<String> {
    let language = web_sys::window()?.navigator().language()?;
    normalize_locale(&language)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_locale() -> Option<String> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Maps a BCP 47 tag such as `de-DE` to the `de_DE` form, keeping it only if
/// the locale is known.
fn normalize_locale(value: &str) -> Option<String> {
    let name = normalize_runtime_value(value)?.replace('-', "_");
    parse_locale(&name).ok().map(|_| name)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_locale, normalize_runtime_value, AppConfig,
        RuntimeConfig,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:5000".to_string(),
            locale: "en_US".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://10.0.0.7:5000 "),
            Some("http://10.0.0.7:5000".to_string())
        );
    }

    #[test]
    fn browser_tags_map_to_known_locales() {
        assert_eq!(normalize_locale("de-DE"), Some("de_DE".to_string()));
        assert_eq!(normalize_locale("en_US"), Some("en_US".to_string()));
        assert_eq!(normalize_locale("zz-ZZ"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            locale: Some("nope".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://admin.internal"),
            locale: Some("fr-FR".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://admin.internal");
        assert_eq!(config.locale, "fr_FR");
    }

    #[test]
    fn load_falls_back_to_default_address() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.locale, "en_US");
    }
}
