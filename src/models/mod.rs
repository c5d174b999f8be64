use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked neighbor produced by the recommender, before enrichment
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub similarity: f32,
}

/// A recommendation that survived the rating filter
#[derive(Debug, Clone, PartialEq)]
pub struct RatedRecommendation {
    pub title: String,
    pub similarity: f32,
    pub rating: f64,
}

/// A fully enriched recommendation as returned to the client
///
/// `poster_url` of `None` means the UI should render its "poster not
/// found" placeholder for that slot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedRecommendation {
    pub title: String,
    pub similarity: f32,
    pub rating: f64,
    pub poster_url: Option<String>,
}

/// Response envelope for one recommendation request
#[derive(Debug, Serialize)]
pub struct RecommendationSet {
    pub query: String,
    pub recommendations: Vec<EnrichedRecommendation>,
    /// Set when no recommendation meets the requested rating threshold,
    /// so the UI renders an explicit message instead of an empty grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// OMDb's sentinel for fields it has no data for
const OMDB_NOT_AVAILABLE: &str = "N/A";

/// Raw response from the OMDb title lookup endpoint (`?t=<title>`)
///
/// OMDb answers unrecognized titles with `Response: "False"` plus an
/// `Error` field, and uses the string `"N/A"` for missing field values.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbTitle {
    /// Whether OMDb recognized the queried title
    pub fn found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Poster URL with the `"N/A"` sentinel mapped to `None`
    pub fn poster_url(&self) -> Option<String> {
        if !self.found() {
            return None;
        }
        self.poster
            .as_deref()
            .filter(|p| *p != OMDB_NOT_AVAILABLE)
            .map(str::to_string)
    }

    /// IMDb rating, degraded to 0.0 when absent, `"N/A"`, or unparseable
    pub fn rating(&self) -> f64 {
        if !self.found() {
            return 0.0;
        }
        self.imdb_rating
            .as_deref()
            .filter(|r| *r != OMDB_NOT_AVAILABLE)
            .and_then(|r| r.parse().ok())
            .unwrap_or(0.0)
    }
}
