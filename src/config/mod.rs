use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_reading_speed")]
    pub reading_speed_wpm: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reading_speed_wpm: default_reading_speed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Treat post bodies as Markdown and render them before analysis.
    #[serde(default = "default_true")]
    pub markdown: bool,
    #[serde(default = "default_true")]
    pub sanitize: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            markdown: true,
            sanitize: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.reading_speed_wpm == 0 {
            anyhow::bail!("analysis.reading_speed_wpm must be greater than 0");
        }
        if !matches!(self.output.format.as_str(), "text" | "json") {
            anyhow::bail!(
                "Invalid output format '{}'. Available formats: text, json",
                self.output.format
            );
        }
        Ok(())
    }
}

fn default_reading_speed() -> usize {
    200
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}
