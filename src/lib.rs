pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{etl::EtlEngine, pipeline::StreetPipeline};
pub use crate::domain::model::{AggregateReport, City, Street};
pub use crate::utils::error::{EtlError, Result};
