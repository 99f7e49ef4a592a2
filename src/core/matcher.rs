use crate::utils::error::{EtlError, Result};
use scraper::{Html, Selector};

/// One known page layout: a CSS selector that both detects the layout and
/// picks the elements holding street text.
pub struct LayoutRule {
    pub name: &'static str,
    selector: Selector,
}

impl LayoutRule {
    pub fn new(name: &'static str, selector: &str) -> Self {
        let selector = Selector::parse(selector)
            .unwrap_or_else(|e| panic!("Invalid layout selector '{}': {}", selector, e));
        Self { name, selector }
    }
}

/// Classifies a parsed document against an ordered table of layout rules.
///
/// Rules are tried in priority order and the first whose selector matches
/// at least one element wins; documents are assumed to use exactly one
/// layout, priority order resolves any ambiguity deterministically. New
/// site redesigns are handled by pushing another rule, never by editing
/// the existing ones.
pub struct StructureMatcher {
    rules: Vec<LayoutRule>,
}

impl Default for StructureMatcher {
    fn default() -> Self {
        Self {
            rules: vec![
                // Current ss.ge redesign, hashed styled-component classes
                LayoutRule::new("listing-card", ".sc-1499352d-34.jlQhwo"),
                // myhome.ge statement cards
                LayoutRule::new("statement-address", "div.statement-card h5.address"),
                // Older plain-list markup
                LayoutRule::new("street-list", "ul.street-list li a"),
            ],
        }
    }
}

impl StructureMatcher {
    pub fn with_rules(rules: Vec<LayoutRule>) -> Self {
        Self { rules }
    }

    pub fn push_rule(&mut self, rule: LayoutRule) {
        self.rules.push(rule);
    }

    /// Returns the text of every element selected by the first matching
    /// rule, in document order, along with the winning rule's name.
    pub fn matches(&self, document: &Html, city_name: &str) -> Result<(Vec<String>, &'static str)> {
        for rule in &self.rules {
            let texts: Vec<String> = document
                .select(&rule.selector)
                .map(|element| element.text().collect::<String>())
                .collect();

            if !texts.is_empty() {
                tracing::debug!(
                    "Matched layout '{}' for '{}' ({} raw entries)",
                    rule.name,
                    city_name,
                    texts.len()
                );
                return Ok((texts, rule.name));
            }
        }

        Err(EtlError::UnsupportedStructure {
            city: city_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn matches_listing_card_layout_in_document_order() {
        let document = doc(concat!(
            r#"<div class="sc-1499352d-34 jlQhwo">Main St</div>"#,
            r#"<div class="sc-1499352d-34 jlQhwo"> </div>"#,
            r#"<div class="sc-1499352d-34 jlQhwo">Elm St</div>"#,
        ));

        let matcher = StructureMatcher::default();
        let (texts, variant) = matcher.matches(&document, "springfield").unwrap();

        assert_eq!(variant, "listing-card");
        assert_eq!(texts, vec!["Main St", " ", "Elm St"]);
    }

    #[test]
    fn matches_statement_address_layout() {
        let document = doc(concat!(
            r#"<div class="statement-card"><h5 class="address">Pekini Ave</h5></div>"#,
            r#"<div class="statement-card"><h5 class="address">Kazbegi Ave</h5></div>"#,
        ));

        let matcher = StructureMatcher::default();
        let (texts, variant) = matcher.matches(&document, "tbilisi").unwrap();

        assert_eq!(variant, "statement-address");
        assert_eq!(texts, vec!["Pekini Ave", "Kazbegi Ave"]);
    }

    #[test]
    fn matches_street_list_layout() {
        let document =
            doc(r#"<ul class="street-list"><li><a href="/streets/1">Gorgasali St</a></li></ul>"#);

        let matcher = StructureMatcher::default();
        let (texts, variant) = matcher.matches(&document, "batumi").unwrap();

        assert_eq!(variant, "street-list");
        assert_eq!(texts, vec!["Gorgasali St"]);
    }

    #[test]
    fn first_matching_rule_wins_when_several_could_match() {
        let document = doc(concat!(
            r#"<div class="sc-1499352d-34 jlQhwo">Card St</div>"#,
            r#"<ul class="street-list"><li><a href="/streets/2">List St</a></li></ul>"#,
        ));

        let matcher = StructureMatcher::default();
        let (texts, variant) = matcher.matches(&document, "kutaisi").unwrap();

        assert_eq!(variant, "listing-card");
        assert_eq!(texts, vec!["Card St"]);
    }

    #[test]
    fn unknown_structure_is_an_error_naming_the_city() {
        let document = doc("<p>Nothing to see here</p>");

        let matcher = StructureMatcher::default();
        let err = matcher.matches(&document, "gotham").unwrap_err();

        match err {
            EtlError::UnsupportedStructure { city } => assert_eq!(city, "gotham"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn new_layouts_are_added_without_touching_existing_rules() {
        let document = doc(r#"<span data-role="street">Freshly Redesigned St</span>"#);

        let mut matcher = StructureMatcher::default();
        assert!(matcher.matches(&document, "newtown").is_err());

        matcher.push_rule(LayoutRule::new("data-role", r#"span[data-role="street"]"#));
        let (texts, variant) = matcher.matches(&document, "newtown").unwrap();

        assert_eq!(variant, "data-role");
        assert_eq!(texts, vec!["Freshly Redesigned St"]);
    }
}
