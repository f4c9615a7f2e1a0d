use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;

mod spec;

pub use spec::*;

pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// What to search for. Results are always restricted to public-domain works with images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub medium: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: "Vincent Van Gogh".to_owned(),
            medium: "Paintings".to_owned(),
        }
    }
}

/// Client for the Met collection API.
#[derive(Debug, Clone)]
pub struct CollectionApi {
    client: reqwest::Client,
    base_url: Url,
}

impl CollectionApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Search for artwork IDs. A search that matched nothing is reported as [`FetchError::NoMatches`].
    #[tracing::instrument(skip(self, query), fields(term = %query.term))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, FetchError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("hasImages", "true")
            .append_pair("isPublicDomain", "true")
            .append_pair("medium", &query.medium)
            .append_pair("q", &query.term);
        let result: SearchResult = self.get(url).await?;
        if result.total == 0 {
            return Err(FetchError::NoMatches {
                term: query.term.clone(),
            });
        }
        tracing::info!(total = result.total, "search matched");
        Ok(result)
    }

    /// Fetch the details of one artwork. `id` is not validated beyond building the URL.
    #[tracing::instrument(skip(self))]
    pub async fn object(&self, id: u64) -> Result<ArtworkDetail, FetchError> {
        let url = self.endpoint(&format!("objects/{id}"))?;
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");
        let result: Result<T, FetchError> = async {
            let body = self
                .client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;
            Ok(serde_json::from_slice(&body)?)
        }
        .await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "fetch failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const SEARCH_SAMPLE: &str = include_str!("../tests/fixtures/search_van_gogh.json");
    const OBJECT_SAMPLE: &str = include_str!("../tests/fixtures/object_459123.json");

    fn api(server: &MockServer) -> CollectionApi {
        CollectionApi::new(reqwest::Client::new(), server.uri().parse().unwrap())
    }

    #[test]
    fn test_endpoint() {
        let api = CollectionApi::new(reqwest::Client::new(), DEFAULT_BASE_URL.parse().unwrap());
        assert_eq!(
            api.endpoint("objects/459123").unwrap().as_str(),
            "https://collectionapi.metmuseum.org/public/collection/v1/objects/459123"
        );
        let api = CollectionApi::new(
            reqwest::Client::new(),
            "http://localhost:8080/v1/".parse().unwrap(),
        );
        assert_eq!(
            api.endpoint("search").unwrap().as_str(),
            "http://localhost:8080/v1/search"
        );
    }

    #[tokio::test]
    async fn test_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("hasImages", "true"))
            .and(query_param("isPublicDomain", "true"))
            .and(query_param("medium", "Paintings"))
            .and(query_param("q", "Vincent Van Gogh"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_SAMPLE))
            .expect(1)
            .mount(&server)
            .await;

        let result = api(&server).search(&SearchQuery::default()).await.unwrap();
        assert_eq!(result.total, 253);
        assert_eq!(result.first_object_id(), Some(459_123));
    }

    #[tokio::test]
    async fn test_search_no_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"total": 0, "objectIDs": null})),
            )
            .mount(&server)
            .await;

        let query = SearchQuery {
            term: "zzzz".to_owned(),
            ..SearchQuery::default()
        };
        let err = api(&server).search(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::NoMatches { term } if term == "zzzz"));
    }

    #[tokio::test]
    async fn test_search_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api(&server)
            .search(&SearchQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/objects/459123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(OBJECT_SAMPLE))
            .expect(1)
            .mount(&server)
            .await;

        let detail = api(&server).object(459_123).await.unwrap();
        assert_eq!(detail.title, "Madame Roulin and Her Baby");
        assert_eq!(detail.medium, "Oil on canvas");
    }

    #[tokio::test]
    async fn test_object_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/objects/1"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Not a valid object"})),
            )
            .mount(&server)
            .await;

        let err = api(&server).object(1).await.unwrap_err();
        assert!(matches!(
            &err,
            FetchError::Http(e) if e.status() == Some(reqwest::StatusCode::NOT_FOUND)
        ));
    }

    #[tokio::test]
    async fn test_unreachable() {
        let api = CollectionApi::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1".parse().unwrap(),
        );
        let err = api.object(459_123).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
