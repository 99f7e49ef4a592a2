use crate::core::extractor::CityExtractor;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{AggregateReport, SourceDocument, TransformResult};
use crate::utils::error::{EtlError, Result};
use scraper::Html;
use std::fs;
use std::path::Path;

pub const AGGREGATE_FILE_NAME: &str = "streets.json";

pub struct StreetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: CityExtractor,
}

impl<S: Storage, C: ConfigProvider> StreetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            extractor: CityExtractor::default(),
        }
    }

    pub fn with_extractor(storage: S, config: C, extractor: CityExtractor) -> Self {
        Self {
            storage,
            config,
            extractor,
        }
    }

    fn collect_html_files(&self, dir: &str) -> Result<Vec<std::path::PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|source| EtlError::DirectoryRead {
            path: Path::new(dir).to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| EtlError::DirectoryRead {
                path: Path::new(dir).to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
                files.push(path);
            }
        }

        // Directory listing order is OS-dependent; sort so runs are reproducible.
        files.sort();
        Ok(files)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for StreetPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceDocument>> {
        let mut documents: Vec<SourceDocument> = Vec::new();

        for dir in self.config.input_dirs() {
            let files = self.collect_html_files(dir)?;
            tracing::debug!("Found {} HTML files in {}", files.len(), dir);

            for path in files {
                let city_name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();

                match fs::read_to_string(&path) {
                    Ok(html) => documents.push(SourceDocument {
                        city_name,
                        path,
                        html,
                    }),
                    Err(e) => {
                        let err = EtlError::DocumentParse {
                            path: path.clone(),
                            reason: e.to_string(),
                        };
                        tracing::warn!("Skipping file: {}", err);
                    }
                }
            }
        }

        if let Some(max) = self.config.max_files() {
            if documents.len() > max {
                tracing::info!(
                    "Limiting run to the first {} of {} documents",
                    max,
                    documents.len()
                );
                documents.truncate(max);
            }
        }

        Ok(documents)
    }

    fn transform(&self, documents: Vec<SourceDocument>) -> Result<TransformResult> {
        let mut cities = Vec::new();
        let mut skipped_files = 0;

        for document in documents {
            let parsed = Html::parse_document(&document.html);
            match self
                .extractor
                .extract_from_document(&parsed, &document.city_name)
            {
                Ok(city) => cities.push(city),
                Err(e) if !e.is_fatal() => {
                    tracing::warn!("Skipping {}: {}", document.path.display(), e);
                    skipped_files += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(TransformResult {
            cities,
            skipped_files,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        if self.config.per_city_json() {
            for city in &result.cities {
                let data = serde_json::to_vec_pretty(city)?;
                self.storage
                    .write_file(&format!("{}.json", city.name), &data)?;
            }
        }

        let report = AggregateReport::new(result.cities);
        let data = serde_json::to_vec_pretty(&report)?;
        self.storage.write_file(AGGREGATE_FILE_NAME, &data)?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            AGGREGATE_FILE_NAME
        ))
    }
}
