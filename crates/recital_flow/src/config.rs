//! Pipeline configuration.
//!
//! TOML-based configuration for model selection and pipeline knobs:
//! - Bundled defaults (include_str! from recital.toml)
//! - User overrides (./recital.toml or ~/.config/recital/recital.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use recital_error::{ConfigError, RecitalError, RecitalResult};

/// Model names used for each pipeline stage.
///
/// Per-step description is high-volume and low-difficulty, so it defaults to
/// a cheaper model than refinement and summarization. A cost/quality policy,
/// not a correctness requirement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Model for per-step description.
    pub describe: String,
    /// Model for cross-step refinement.
    pub refine: String,
    /// Model for narrative summarization.
    pub summarize: String,
}

/// Sampling parameters shared by the generation stages.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature for per-step description.
    pub describe_temperature: f32,
    /// Token cap for one step sentence.
    pub describe_max_tokens: u32,
    /// Sampling temperature for refinement.
    pub refine_temperature: f32,
    /// Token cap for the refined list.
    pub refine_max_tokens: u32,
    /// Sampling temperature for summarization.
    pub summarize_temperature: f32,
    /// Token cap for the summary document.
    pub summarize_max_tokens: u32,
}

/// Execution knobs for the pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineOptions {
    /// Maximum number of concurrent per-step description calls.
    pub describe_concurrency: usize,
    /// How many times a contract-violating refine/summarize response is
    /// re-requested before the violation is fatal.
    pub contract_retries: usize,
}

/// Top-level pipeline configuration.
///
/// # Example
///
/// ```no_run
/// use recital_flow::PipelineConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PipelineConfig::load()?;
/// println!("describe model: {}", config.models.describe);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Per-stage model selection.
    pub models: ModelConfig,
    /// Per-stage sampling parameters.
    pub generation: GenerationConfig,
    /// Execution knobs.
    pub pipeline: PipelineOptions,
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../recital.toml");

impl PipelineConfig {
    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Sources in order of precedence (later override earlier):
    /// 1. Bundled defaults (recital.toml shipped with the library)
    /// 2. User config in home directory (~/.config/recital/recital.toml)
    /// 3. User config in current directory (./recital.toml)
    ///
    /// User config files are optional and silently skipped if absent.
    #[instrument]
    pub fn load() -> RecitalResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/recital/recital.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("recital").required(false));

        builder
            .build()
            .map_err(|e| {
                RecitalError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                RecitalError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from a specific file path.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> RecitalResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                RecitalError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                RecitalError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

impl Default for PipelineConfig {
    /// The bundled defaults, without user overrides.
    fn default() -> Self {
        // The bundled file is validated by the `bundled_defaults_parse` test.
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .unwrap_or_else(|e| panic!("bundled recital.toml is invalid: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = PipelineConfig::default();
        assert!(!config.models.describe.is_empty());
        assert!(!config.models.refine.is_empty());
        assert!(!config.models.summarize.is_empty());
        assert!(config.pipeline.describe_concurrency >= 1);
    }

    #[test]
    fn defaults_use_a_cheaper_describe_model() {
        let config = PipelineConfig::default();
        assert_ne!(config.models.describe, config.models.refine);
        assert_eq!(config.models.refine, config.models.summarize);
    }
}
