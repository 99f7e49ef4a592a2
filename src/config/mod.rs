pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "streets-etl")]
#[command(about = "Extracts street listings from local HTML snapshots into a JSON aggregate")]
pub struct CliConfig {
    /// Directories scanned (non-recursively) for .html files
    #[arg(long, value_delimiter = ',', default_values_t = [
        "raw_data_ss".to_string(),
        "raw_data_myhome".to_string(),
    ])]
    pub input_dirs: Vec<String>,

    #[arg(long, default_value = "parsed_data")]
    pub output_path: String,

    /// Also write one <city>.json file per processed input file
    #[arg(long)]
    pub per_city_json: bool,

    /// Process at most this many files across all input directories
    #[arg(long)]
    pub max_files: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dirs(&self) -> &[String] {
        &self.input_dirs
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn per_city_json(&self) -> bool {
        self.per_city_json
    }

    fn max_files(&self) -> Option<usize> {
        self.max_files
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("input_dirs", &self.input_dirs)?;
        for dir in &self.input_dirs {
            validation::validate_path("input_dirs", dir)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(max_files) = self.max_files {
            validation::validate_positive_number("max_files", max_files, 1)?;
        }
        Ok(())
    }
}
