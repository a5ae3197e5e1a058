#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default(false)]
    default_force_push: bool,
    #[default("info")]
    log_filter: &'static str,
    #[default(false)]
    json_output: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Used when a request carries no force_push of its own
    pub default_force_push: bool,
    // Fallback when RUST_LOG is not set
    pub log_filter: String,
    pub json_output: bool,
}

impl Config {
    pub fn read() -> Self {
        Config::from(TOML_CONFIG)
    }
}

impl From<TomlConfig> for Config {
    fn from(config: TomlConfig) -> Self {
        let log_filter = if config.log_filter.is_empty() {
            Config::default().log_filter
        } else {
            config.log_filter.to_string()
        };
        Config {
            default_force_push: config.default_force_push,
            log_filter,
            json_output: config.json_output,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_force_push: false,
            log_filter: "info".to_string(),
            json_output: false,
        }
    }
}
