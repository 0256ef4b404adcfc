use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub submission: SubmissionConfig,
    pub list: ListConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubmissionConfig {
    /// Задержка имитации запроса к серверу
    pub delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Поиск срабатывает начиная с этого количества символов
    pub search_min_chars: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub max_file_size_mb: u64,
    pub allowed_mime_types: Vec<String>,
}

impl UploadConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 5,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "image/jpeg".to_string(),
                "image/png".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[submission]
delay_ms = 1500

[list]
page_size = 25
page_size_options = [10, 25, 50]
search_min_chars = 1

[uploads]
max_file_size_mb = 5
allowed_mime_types = ["application/pdf", "image/jpeg", "image/png"]

[logging]
level = "debug"
"#;

impl AppConfig {
    /// Загрузка конфигурации
    ///
    /// Порядок поиска:
    /// 1. TOML-переопределение (фронтенд берёт его из localStorage)
    /// 2. Иначе встроенная конфигурация по умолчанию
    pub fn load(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
        if let Some(text) = override_toml.filter(|t| !t.trim().is_empty()) {
            match toml::from_str::<AppConfig>(text) {
                Ok(config) => {
                    log::info!("Using configuration override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
            }
        }

        let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        match self.logging.level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submission: SubmissionConfig { delay_ms: 1500 },
            list: ListConfig {
                page_size: 25,
                page_size_options: vec![10, 25, 50],
                search_min_chars: 1,
            },
            uploads: UploadConfig::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.submission.delay_ms, 1500);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_override_wins_when_valid() {
        let text = r#"
[submission]
delay_ms = 2000

[list]
page_size = 10
page_size_options = [10]
search_min_chars = 3

[logging]
level = "warn"
"#;
        let config = AppConfig::load(Some(text)).unwrap();
        assert_eq!(config.submission.delay_ms, 2000);
        assert_eq!(config.list.search_min_chars, 3);
        assert_eq!(config.uploads, UploadConfig::default());
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = AppConfig::load(Some("submission = 5")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
