use serde::{Deserialize, Serialize};

/// A single movie as OMDB describes it. The same field names are used when
/// relaying it back out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "Poster")]
    pub poster_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(rename = "Search")]
    pub matches: Vec<MovieRecord>,
}

/// OMDB answers a miss with `200 OK` and `{"Response":"False","Error":"..."}`,
/// so the envelope is checked before the payload is decoded.
#[derive(Deserialize, Debug, Default)]
pub struct UpstreamEnvelope {
    #[serde(rename = "Response")]
    pub response: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl UpstreamEnvelope {
    pub fn is_miss(&self) -> bool {
        self.response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("false"))
    }
}
