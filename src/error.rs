use thiserror::Error;

/// Why a request to the collection API produced no usable value.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid endpoint address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no artworks matched {term:?}")]
    NoMatches { term: String },
}

/// Conditions the report cannot present, as opposed to fetches that came back empty.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("search reported {total} matches but returned no object IDs")]
    EmptyObjectIds { total: u64 },

    #[error("object {object_id} has no metric measurements")]
    EmptyMeasurements { object_id: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
