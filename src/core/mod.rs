pub mod etl;
pub mod extractor;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{AggregateReport, City, SourceDocument, Street, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
