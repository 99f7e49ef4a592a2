use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub name: String,
}

impl Street {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One input file's worth of streets. `street_count` is derived from
/// `streets` at construction and is never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub streets: Vec<Street>,
    pub street_count: usize,
}

impl City {
    pub fn new(name: impl Into<String>, streets: Vec<Street>) -> Self {
        let street_count = streets.len();
        Self {
            name: name.into(),
            streets,
            street_count,
        }
    }
}

/// Terminal output artifact of a run: every city in processing order plus
/// the summed street count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total_street_count: usize,
    pub cities: Vec<City>,
}

impl AggregateReport {
    pub fn new(cities: Vec<City>) -> Self {
        let total_street_count = cities.iter().map(|c| c.street_count).sum();
        Self {
            total_street_count,
            cities,
        }
    }
}

/// A raw input file read off disk, not yet parsed. The city name is the
/// file stem verbatim, including case and special characters.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub city_name: String,
    pub path: PathBuf,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub cities: Vec<City>,
    pub skipped_files: usize,
}
