use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Extracting documents...");
        let documents = self.pipeline.extract()?;
        tracing::info!("Extracted {} documents", documents.len());

        tracing::info!("Transforming documents...");
        let result = self.pipeline.transform(documents)?;
        tracing::info!(
            "Transformed {} cities ({} files skipped)",
            result.cities.len(),
            result.skipped_files
        );

        tracing::info!("Loading aggregate...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
