use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::data::locations::{Location, LOCATIONS};
use crate::data::services::SERVICES;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("valid regex"));
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceLocation {
    pub service_id: &'static str,
    pub location_id: &'static str,
}

/// Every service paired with every location, services in the outer loop.
pub fn service_location_combinations() -> Vec<ServiceLocation> {
    SERVICES
        .iter()
        .flat_map(|service| {
            LOCATIONS.iter().map(move |location| ServiceLocation {
                service_id: service.id,
                location_id: location.id,
            })
        })
        .collect()
}

/// Lowercase, dash separated, ASCII word characters only.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-");
    let cleaned = NON_WORD.replace_all(&dashed, "");
    let collapsed = DASH_RUNS.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// "Nashville, TN"
pub fn format_location_name(location: &Location) -> String {
    format!("{}, {}", location.name, location.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locations::get_location_by_id;

    #[test]
    fn combinations_cover_every_pair_once() {
        let combos = service_location_combinations();
        assert_eq!(combos.len(), SERVICES.len() * LOCATIONS.len());
        assert_eq!(
            combos[0],
            ServiceLocation { service_id: "facebook-posts-with-image", location_id: "nashville-tn" }
        );
        assert_eq!(
            combos[LOCATIONS.len()],
            ServiceLocation { service_id: "instagram-posts-with-image", location_id: "nashville-tn" }
        );

        let mut unique = combos.clone();
        unique.sort_by_key(|c| (c.service_id, c.location_id));
        unique.dedup();
        assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn slugify_cleans_titles() {
        assert_eq!(slugify("Facebook Posts with Image"), "facebook-posts-with-image");
        assert_eq!(slugify("  SEO   Blog Posts! "), "seo-blog-posts");
        assert_eq!(slugify("Nashville, TN"), "nashville-tn");
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--edge--"), "edge");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugs_match_dataset_ids() {
        for service in SERVICES {
            assert_eq!(slugify(service.title), service.id);
        }
        for location in LOCATIONS {
            assert_eq!(slugify(&format_location_name(location)), location.id);
        }
    }

    #[test]
    fn formats_location_names() {
        let location = get_location_by_id("lexington-ky").expect("location exists");
        assert_eq!(format_location_name(location), "Lexington, KY");
    }
}
