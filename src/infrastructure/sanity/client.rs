use super::error::SanityError;
use crate::config::SanityConfig;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

/// HTTP client for the content backend's query and mutation APIs.
///
/// Built once from configuration and shared; it holds no per-request state.
#[derive(Clone, Debug)]
pub struct SanityClient {
    http: Client,
    query_url: Url,
    mutate_url: Url,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    description: Option<String>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, SanityError> {
        let base = Url::parse(&config.api_host())?;
        let version = config.api_version.trim_start_matches('v');
        let query_url = base.join(&format!("v{version}/data/query/{}", config.dataset))?;
        let mutate_url = base.join(&format!("v{version}/data/mutate/{}", config.dataset))?;
        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            query_url,
            mutate_url,
            token: config.token.clone(),
        })
    }

    pub const fn user_agent() -> &'static str {
        concat!("homeguide/", env!("CARGO_PKG_VERSION"))
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    /// Run a read query. Parameters are sent JSON-encoded as `$name`.
    /// A `null` result is `Ok(None)`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<Option<T>, SanityError> {
        let mut url = self.query_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }

        tracing::debug!(url = %self.query_url, "querying content backend");
        let resp = self.http.get(url).send().await?;
        let body: QueryResponse<T> = Self::handle(resp).await?;
        Ok(body.result)
    }

    /// Create one document. Requires a write token.
    pub async fn create(&self, document: Value) -> Result<(), SanityError> {
        let token = self.token.as_deref().ok_or(SanityError::MissingToken)?;
        let payload = json!({ "mutations": [{ "create": document }] });

        let resp = self
            .http
            .post(self.mutate_url.clone())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        let _: Value = Self::handle(resp).await?;
        Ok(())
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, SanityError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let message = Self::error_message(&bytes);
            return Err(if status.as_u16() == 400 {
                SanityError::Query {
                    status: status.as_u16(),
                    message,
                }
            } else {
                SanityError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn error_message(bytes: &[u8]) -> String {
        serde_json::from_slice::<ErrorResponse>(bytes)
            .ok()
            .and_then(|body| {
                body.error
                    .and_then(|detail| detail.description)
                    .or(body.message)
            })
            .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned())
    }
}
