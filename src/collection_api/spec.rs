use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// Artwork IDs matching a search.
/// See [search](https://metmuseum.github.io/#search).
#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub total: u64,
    /// Ordered by relevance. The API sends `null` instead of `[]` when nothing matched.
    #[serde(rename = "objectIDs")]
    #[serde_as(as = "DefaultOnNull")]
    pub object_ids: Vec<u64>,
}

impl SearchResult {
    pub fn first_object_id(&self) -> Option<u64> {
        self.object_ids.first().copied()
    }
}

/// A single artwork, flattened to the fields we present.
/// See [object](https://metmuseum.github.io/#object).
#[allow(dead_code)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetail {
    pub primary_image: String,
    pub department: String,
    pub title: String,
    pub artist_display_name: String,
    pub medium: String,
    /// Imperial, free form (e.g. `25 x 20 1/8 in.`).
    pub dimensions: String,
    pub measurements: Vec<Measurement>,
    pub credit_line: String,
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

impl ArtworkDetail {
    pub fn first_measurement(&self) -> Option<&ElementMeasurement> {
        self.measurements.first().map(|m| &m.element_measurements)
    }
}

/// A measured element of an artwork, e.g. "Overall" or "Frame".
#[allow(dead_code)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub element_name: String,
    pub element_measurements: ElementMeasurement,
}

/// Metric size in centimeters.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ElementMeasurement {
    pub height: f64,
    pub width: f64,
}
