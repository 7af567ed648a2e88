// src/modules/content/adapter/outgoing/sanity_content_query.rs
//
// ContentQuery adapter over the Sanity HTTP query API. Each call is a single
// stateless GET against /data/query/{dataset} with a GROQ string; responses
// arrive wrapped in a {"result": ...} envelope. Image asset URLs are resolved
// by the query projections, so documents come back ready for the mapper.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::application::domain::documents::{ProjectDocument, ServiceDocument};
use crate::content::application::ports::outgoing::content_query::{
    ContentQuery, ContentQueryError,
};

//
// ──────────────────────────────────────────────────────────
// Queries
// ──────────────────────────────────────────────────────────
//

const PROJECTS_QUERY: &str = r#"*[_type == "project"] | order(priority asc, _createdAt desc) {
  _id, name, slug, description, category, priority, url, githubUrl,
  "logoUrl": logo.asset->url,
  coverImages[] { alt, "url": asset->url },
  "coverImage": coverImages[0].asset->url,
  technologies,
  projectDimensions { timeline { value, unit }, teamSize, iterations, technologies },
  projectSections[] { _key, id, name, description, images[] { alt, "url": asset->url } }
}"#;

const PROJECT_BY_SLUG_QUERY: &str = r#"*[_type == "project" && slug.current == $slug][0] {
  _id, name, slug, description, category, priority, url, githubUrl,
  "logoUrl": logo.asset->url,
  coverImages[] { alt, "url": asset->url },
  "coverImage": coverImages[0].asset->url,
  technologies,
  projectDimensions { timeline { value, unit }, teamSize, iterations, technologies },
  projectSections[] { _key, id, name, description, images[] { alt, "url": asset->url } }
}"#;

const SERVICES_QUERY: &str = r#"*[_type == "service"] | order(_createdAt asc) {
  _id, name, shortDescription, description, icon, categories
}"#;

//
// ──────────────────────────────────────────────────────────
// Configuration
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
}

impl SanityConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: std::env::var("SANITY_PROJECT_ID")
                .expect("SANITY_PROJECT_ID is not set in .env file"),
            dataset: std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string()),
            api_version: std::env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".to_string()),
            token: std::env::var("SANITY_API_TOKEN").ok(),
        }
    }

    fn query_url(&self) -> String {
        // Unauthenticated reads go through the CDN host.
        let host = if self.token.is_some() { "api" } else { "apicdn" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
struct QueryEnvelope<T> {
    result: T,
}

pub struct SanityContentQuery {
    http: reqwest::Client,
    query_url: String,
    token: Option<String>,
}

impl SanityContentQuery {
    pub fn new(config: &SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            query_url: config.query_url(),
            token: config.token.clone(),
        }
    }

    /// Points the adapter at an arbitrary query endpoint (local stub server).
    pub fn new_with_query_url(query_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            query_url: query_url.to_string(),
            token: None,
        }
    }

    async fn fetch<T>(&self, query: &str, params: &[(&str, String)]) -> Result<T, ContentQueryError>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.get(&self.query_url).query(&[("query", query)]);
        for (key, value) in params {
            request = request.query(&[(*key, value.as_str())]);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentQueryError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentQueryError::QueryFailed(format!(
                "repository responded with status {}",
                status
            )));
        }

        let envelope: QueryEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ContentQueryError::DecodeError(e.to_string()))?;

        Ok(envelope.result)
    }
}

/// Stable sort enforcing the repository contract client-side: explicit
/// priorities ascending before default-priority documents, which keep their
/// relative order (the query's secondary `_createdAt desc` ordering).
pub fn sort_projects_by_priority(docs: &mut [ProjectDocument]) {
    docs.sort_by_key(|doc| doc.sort_priority());
}

#[async_trait]
impl ContentQuery for SanityContentQuery {
    async fn list_projects(&self) -> Result<Vec<ProjectDocument>, ContentQueryError> {
        let mut docs: Vec<ProjectDocument> = self.fetch(PROJECTS_QUERY, &[]).await?;
        sort_projects_by_priority(&mut docs);
        Ok(docs)
    }

    async fn get_project_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectDocument>, ContentQueryError> {
        // Query params are JSON-encoded, so string values arrive quoted.
        let encoded = serde_json::Value::String(slug.to_string()).to_string();
        self.fetch(PROJECT_BY_SLUG_QUERY, &[("$slug", encoded)]).await
    }

    async fn list_services(&self) -> Result<Vec<ServiceDocument>, ContentQueryError> {
        self.fetch(SERVICES_QUERY, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_priority(id: &str, priority: Option<i64>) -> ProjectDocument {
        let mut value = serde_json::json!({ "_id": id });
        if let Some(p) = priority {
            value["priority"] = serde_json::json!(p);
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn sort_puts_explicit_priorities_before_defaults() {
        let mut docs = vec![
            doc_with_priority("a", None),
            doc_with_priority("b", Some(3)),
            doc_with_priority("c", Some(1)),
            doc_with_priority("d", None),
        ];

        sort_projects_by_priority(&mut docs);

        let order: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        // Explicit ascending first; default-priority entries keep their
        // relative input order.
        assert_eq!(order, vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn sort_is_stable_among_equal_priorities() {
        let mut docs = vec![
            doc_with_priority("newer", Some(2)),
            doc_with_priority("older", Some(2)),
            doc_with_priority("explicit-default", Some(10)),
            doc_with_priority("implicit-default", None),
        ];

        sort_projects_by_priority(&mut docs);

        let order: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["newer", "older", "explicit-default", "implicit-default"]
        );
    }

    #[test]
    fn envelope_decodes_project_list() {
        let envelope: QueryEnvelope<Vec<ProjectDocument>> = serde_json::from_value(
            serde_json::json!({ "result": [{ "_id": "p-1", "name": "One" }], "ms": 12 }),
        )
        .unwrap();

        assert_eq!(envelope.result.len(), 1);
        assert_eq!(envelope.result[0].name.as_deref(), Some("One"));
    }

    #[test]
    fn envelope_decodes_null_single_result() {
        let envelope: QueryEnvelope<Option<ProjectDocument>> =
            serde_json::from_value(serde_json::json!({ "result": null })).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn query_url_uses_cdn_host_without_token() {
        let config = SanityConfig {
            project_id: "r09ozqjm".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
        };
        assert_eq!(
            config.query_url(),
            "https://r09ozqjm.apicdn.sanity.io/v2024-01-01/data/query/production"
        );

        let authed = SanityConfig {
            token: Some("secret".to_string()),
            ..config
        };
        assert!(authed.query_url().contains(".api.sanity.io"));
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_unreachable_error() {
        // Reserved TLD, guaranteed not to resolve.
        let query =
            SanityContentQuery::new_with_query_url("http://repository.invalid/data/query/test");

        let err = query.list_projects().await.unwrap_err();
        assert!(matches!(err, ContentQueryError::Unreachable(_)));
    }
}
