use url::Url;

use crate::collection_api::{DEFAULT_BASE_URL, SearchQuery};

/// Search the Met collection and describe the most relevant public-domain artwork.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Search term, e.g. an artist name
    #[arg(short, long, default_value = "Vincent Van Gogh")]
    pub query: String,
    /// Restrict results to this medium
    #[arg(long, default_value = "Paintings")]
    pub medium: String,
    /// Root of the collection API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

impl Cli {
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            term: self.query.clone(),
            medium: self.medium.clone(),
        }
    }
}
