use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// URL base de la API (incluye el prefijo `/api`)
    pub api_base_url: String,
    /// Usuario con el que arranca la demo
    pub default_user_id: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UIConfig {
    /// Tiempo visible de un toast antes de la animación de salida
    pub toast_duration_ms: u32,
    /// Duración de la animación de salida del toast
    pub toast_exit_ms: u32,
    /// Periodo del tick del indicador de carga
    pub load_tick_ms: u32,
    /// A partir de aquí el indicador pasa a estado "lento"
    pub slow_load_threshold_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            default_user_id: "user123".to_string(),
            enable_logging: true,
            ui_config: UIConfig::default(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            toast_exit_ms: 300,
            load_tick_ms: 100,
            slow_load_threshold_secs: 2.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            default_user_id: option_env!("DEFAULT_USER_ID")
                .filter(|id| !id.trim().is_empty())
                .map(|id| id.trim().to_string())
                .unwrap_or(defaults.default_user_id),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            ui_config: UIConfig {
                toast_duration_ms: parse_or(
                    option_env!("TOAST_DURATION_MS"),
                    defaults.ui_config.toast_duration_ms,
                ),
                toast_exit_ms: defaults.ui_config.toast_exit_ms,
                load_tick_ms: parse_or(option_env!("LOAD_TICK_MS"), defaults.ui_config.load_tick_ms),
                slow_load_threshold_secs: parse_or(
                    option_env!("SLOW_LOAD_THRESHOLD_SECS"),
                    defaults.ui_config.slow_load_threshold_secs,
                ),
            },
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
