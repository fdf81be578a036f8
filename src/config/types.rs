use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where downloaded listing payloads live: one `<listing_id>.<extension>` file each.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Append to an existing file instead of truncating it.
    #[serde(default = "default_true")]
    pub append: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            append: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/listing_page_jsons")
}

fn default_extension() -> String {
    "jsonl".into()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data/parse_listings/description_amenities_house_rules.jsonl")
}

fn default_true() -> bool {
    true
}

fn default_concurrency() -> usize {
    8
}

fn default_filter() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.input.data_dir, PathBuf::from("data/listing_page_jsons"));
        assert_eq!(config.input.extension, "jsonl");
        assert!(config.output.append);
        assert_eq!(config.batch.concurrency, 8);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn config_serde_roundtrip() {
        let original = Config::default();
        let yaml = serde_yml::to_string(&original).unwrap();
        let restored: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(restored.output.path, original.output.path);
        assert_eq!(restored.batch.concurrency, original.batch.concurrency);
    }

    #[test]
    fn config_deserialize_with_overrides() {
        let yaml = "batch:\n  concurrency: 2\noutput:\n  append: false";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.batch.concurrency, 2);
        assert!(!config.output.append);
        // Other fields get defaults
        assert_eq!(config.input.extension, "jsonl");
        assert_eq!(config.logging.filter, "info");
    }
}
