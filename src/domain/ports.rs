use crate::domain::model::{SourceDocument, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_dirs(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn per_city_json(&self) -> bool;
    /// Cap on the number of documents taken from the input directories.
    fn max_files(&self) -> Option<usize>;
}

/// Extract lists and reads the candidate files, transform turns each
/// document into a City record, load writes the aggregate artifact and
/// returns its path.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceDocument>>;
    fn transform(&self, documents: Vec<SourceDocument>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
