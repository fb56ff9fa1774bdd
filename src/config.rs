use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Snapshot document to read; `-` reads stdin.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeConfig {
    /// Window key of a windowed document (e.g. "1m"). Unset = plain snapshot record.
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            window: None,
            validate: default_validate(),
        }
    }
}

fn default_validate() -> bool {
    true
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "visorstat.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.input.path.is_empty(), "input.path must be non-empty");
        if let Some(window) = &self.decode.window {
            anyhow::ensure!(
                !window.is_empty(),
                "decode.window must be non-empty when set"
            );
        }
        Ok(())
    }
}
