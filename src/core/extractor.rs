use crate::core::matcher::StructureMatcher;
use crate::domain::model::{City, Street};
use crate::utils::error::Result;
use scraper::Html;

/// Turns one parsed document plus its derived city name into a City record.
pub struct CityExtractor {
    matcher: StructureMatcher,
}

impl Default for CityExtractor {
    fn default() -> Self {
        Self {
            matcher: StructureMatcher::default(),
        }
    }
}

impl CityExtractor {
    pub fn new(matcher: StructureMatcher) -> Self {
        Self { matcher }
    }

    /// Raw matches pass through a filter before they count as streets:
    /// blank entries and entries equal to the city name are layout
    /// artifacts (separators, repeated page headers), not street names.
    pub fn extract_from_document(&self, document: &Html, city_name: &str) -> Result<City> {
        let (raw, variant) = self.matcher.matches(document, city_name)?;

        let streets: Vec<Street> = raw
            .into_iter()
            .filter(|text| !text.trim().is_empty() && text != city_name)
            .map(Street::new)
            .collect();

        tracing::debug!(
            "Extracted {} streets for '{}' via layout '{}'",
            streets.len(),
            city_name,
            variant
        );

        Ok(City::new(city_name, streets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;

    fn listing_doc(entries: &[&str]) -> Html {
        let body: String = entries
            .iter()
            .map(|e| format!(r#"<div class="sc-1499352d-34 jlQhwo">{}</div>"#, e))
            .collect();
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn blank_entries_are_dropped() {
        let document = listing_doc(&["Main St", " ", "Elm St"]);
        let city = CityExtractor::default()
            .extract_from_document(&document, "springfield")
            .unwrap();

        assert_eq!(city.name, "springfield");
        assert_eq!(
            city.streets,
            vec![Street::new("Main St"), Street::new("Elm St")]
        );
        assert_eq!(city.street_count, 2);
    }

    #[test]
    fn entries_equal_to_the_city_name_are_dropped() {
        let document = listing_doc(&["batumi", "Gorgasali St", "batumi"]);
        let city = CityExtractor::default()
            .extract_from_document(&document, "batumi")
            .unwrap();

        assert_eq!(city.streets, vec![Street::new("Gorgasali St")]);
        assert_eq!(city.street_count, 1);
    }

    #[test]
    fn every_entry_filtered_yields_an_empty_city() {
        let document = listing_doc(&["", " ", "ghost town"]);
        let city = CityExtractor::default()
            .extract_from_document(&document, "ghost town")
            .unwrap();

        assert!(city.streets.is_empty());
        assert_eq!(city.street_count, 0);
    }

    #[test]
    fn count_always_matches_retained_streets_not_raw_matches() {
        let document = listing_doc(&["A St", "", "B St", " ", "C St"]);
        let city = CityExtractor::default()
            .extract_from_document(&document, "trifield")
            .unwrap();

        assert_eq!(city.street_count, city.streets.len());
        assert_eq!(city.street_count, 3);
    }

    #[test]
    fn unsupported_structure_propagates() {
        let document = Html::parse_document("<html><body><p>no layout</p></body></html>");
        let err = CityExtractor::default()
            .extract_from_document(&document, "nowhere")
            .unwrap_err();

        assert!(matches!(err, EtlError::UnsupportedStructure { .. }));
    }

    #[test]
    fn filter_is_idempotent() {
        let document = listing_doc(&["Main St", " ", "Elm St"]);
        let extractor = CityExtractor::default();
        let once = extractor
            .extract_from_document(&document, "springfield")
            .unwrap();

        // Re-running the filter over the surviving names changes nothing.
        let names: Vec<String> = once.streets.iter().map(|s| s.name.clone()).collect();
        let refiltered: Vec<String> = names
            .iter()
            .filter(|t| !t.trim().is_empty() && t.as_str() != "springfield")
            .cloned()
            .collect();

        assert_eq!(names, refiltered);
    }
}
