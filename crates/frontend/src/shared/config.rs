//! Конфигурация фронтенда: встроенный TOML + переопределение из localStorage.

use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Ключ localStorage с TOML-переопределением
pub const CONFIG_STORAGE_KEY: &str = "app_config";

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Загружает конфигурацию; при ошибке в переопределении берёт значения по умолчанию
pub fn load_app_config() -> AppConfig {
    let override_toml = read_override();
    match AppConfig::load(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("app_config ignored: {e:#}").into());
            AppConfig::default()
        }
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
