//! Runtime configuration for the dashboard shell.
//!
//! Defaults are compiled in. A host page may replace any of them by defining
//! `window.__DASHBOARD_CONFIG__` before the wasm bundle loads, either as a
//! plain object or as a JSON string:
//!
//! ```html
//! <script>
//!   window.__DASHBOARD_CONFIG__ = { title: "Ops", icon_size: 24 };
//! </script>
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Name of the global the host page uses to pass overrides.
pub const OVERRIDE_GLOBAL: &str = "__DASHBOARD_CONFIG__";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub logo: LogoConfig,
    /// Edge length of the sidebar icons, in pixels.
    pub icon_size: u32,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoConfig {
    pub src: String,
    pub alt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Camp Dashboard".to_string(),
            logo: LogoConfig {
                src: "./camp.svg".to_string(),
                alt: "logo".to_string(),
            },
            icon_size: 30,
            log_level: "info".to_string(),
        }
    }
}

// -- Partial structs for overrides --

#[derive(Debug, Deserialize)]
pub struct ConfigOverride {
    pub title: Option<String>,
    pub logo: Option<LogoOverride>,
    pub icon_size: Option<u32>,
    pub log_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogoOverride {
    pub src: Option<String>,
    pub alt: Option<String>,
}

impl ConfigOverride {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl AppConfig {
    /// Build the effective configuration: defaults, then the host page
    /// override if one is present, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match read_override()? {
            Some(overrides) => Self::default().merge(overrides),
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace every field the override sets, keeping the rest.
    pub fn merge(mut self, overrides: ConfigOverride) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(logo) = overrides.logo {
            if let Some(src) = logo.src {
                self.logo.src = src;
            }
            if let Some(alt) = logo.alt {
                self.logo.alt = alt;
            }
        }
        if let Some(size) = overrides.icon_size {
            self.icon_size = size;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level.to_ascii_lowercase();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "title",
                reason: "must not be empty".to_string(),
            });
        }
        if self.icon_size == 0 {
            return Err(ConfigError::Invalid {
                field: "icon_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!(
                    "expected one of {}, got `{}`",
                    LOG_LEVELS.join(", "),
                    self.log_level
                ),
            });
        }
        Ok(())
    }
}

fn read_override() -> Result<Option<ConfigOverride>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(OVERRIDE_GLOBAL))
        .map_err(|e| ConfigError::Override(describe_js_error(&e)))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    if let Some(json) = value.as_string() {
        return ConfigOverride::from_json(&json).map(Some);
    }

    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Override(e.to_string()))
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}
