use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub extract: Option<ExtractConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_dirs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub per_city_json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dirs(&self) -> &[String] {
        &self.source.input_dirs
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn per_city_json(&self) -> bool {
        self.load.per_city_json.unwrap_or(false)
    }

    fn max_files(&self) -> Option<usize> {
        self.extract.as_ref().and_then(|e| e.max_files)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_non_empty_list("source.input_dirs", &self.source.input_dirs)?;
        for dir in &self.source.input_dirs {
            validation::validate_path("source.input_dirs", dir)?;
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        if let Some(max_files) = self.extract.as_ref().and_then(|e| e.max_files) {
            validation::validate_positive_number("extract.max_files", max_files, 1)?;
        }
        Ok(())
    }
}
