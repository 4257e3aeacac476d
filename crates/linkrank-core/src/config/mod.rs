//! Configuration management

use crate::corpus::ScanOptions;
use crate::error::{LinkRankError, Result};
use crate::rank::{
    DanglingPolicy, IterationConfig, SamplingConfig, DEFAULT_DAMPING, DEFAULT_SAMPLES,
    DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "LINKRANK_CONFIG";

/// Ranking configuration, stored as YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Pages visited by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence threshold for the iterative estimator
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Optional round limit for the iterative estimator
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Seed for the sampling estimator (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Treatment of pages without links in the iterative estimator
    #[serde(default)]
    pub dangling: DanglingPolicy,

    /// Glob pattern selecting corpus pages
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Crawl subdirectories of the corpus
    #[serde(default)]
    pub recursive: bool,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_pattern() -> String {
    "*.html".to_string()
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_iterations: None,
            seed: None,
            dangling: DanglingPolicy::default(),
            pattern: default_pattern(),
            recursive: false,
        }
    }
}

impl RankConfig {
    /// Load config from the default path, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: RankConfig = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(RankConfig::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path (`$LINKRANK_CONFIG` wins over the user config directory)
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_DAMPING`, `LINKRANK_SAMPLES` and `LINKRANK_SEED`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(damping) = env_parse::<f64>("LINKRANK_DAMPING")? {
            self.damping = damping;
        }
        if let Some(samples) = env_parse::<usize>("LINKRANK_SAMPLES")? {
            self.samples = samples;
        }
        if let Some(seed) = env_parse::<u64>("LINKRANK_SEED")? {
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Reject settings either estimator would refuse
    pub fn validate(&self) -> Result<()> {
        self.sampling_config().validate()?;
        self.iteration_config().validate()?;
        if self.pattern.trim().is_empty() {
            return Err(LinkRankError::Config("pattern must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            damping: self.damping,
            samples: self.samples,
        }
    }

    pub fn iteration_config(&self) -> IterationConfig {
        IterationConfig {
            damping: self.damping,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
            dangling: self.dangling,
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            pattern: self.pattern.clone(),
            recursive: self.recursive,
            ..ScanOptions::default()
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| LinkRankError::Config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = RankConfig::default();
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.samples, 10_000);
        assert_eq!(config.threshold, 0.001);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.dangling, DanglingPolicy::Drop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RankConfig::load_from(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config, RankConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: 0.9\ndangling: uniform\nseed: 7\n").unwrap();

        let config = RankConfig::load_from(&path).unwrap();
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.dangling, DanglingPolicy::Uniform);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.samples, 10_000);
        assert_eq!(config.pattern, "*.html");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.yml");
        let config = RankConfig {
            samples: 500,
            max_iterations: Some(50),
            recursive: true,
            ..RankConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(RankConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            RankConfig {
                damping: 1.2,
                ..RankConfig::default()
            },
            RankConfig {
                samples: 0,
                ..RankConfig::default()
            },
            RankConfig {
                threshold: -1.0,
                ..RankConfig::default()
            },
            RankConfig {
                pattern: " ".to_string(),
                ..RankConfig::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }
}
