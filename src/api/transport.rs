use serde_json::Value;

use crate::error::AppError;

/// Authenticated JSON GET against the API root
pub(crate) trait Transport {
    /// `path` is relative to the API root and starts with `/`
    fn get_json(&mut self, path: &str, query: &[(&str, &str)]) -> Result<Value, AppError>;
}

/// Blocking ureq transport using `Authorization: Key <api key>`
pub(crate) struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

impl HttpTransport {
    pub(crate) fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: format!("Key {api_key}"),
        }
    }
}

impl Transport for HttpTransport {
    fn get_json(&mut self, path: &str, query: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url} {query:?}");

        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", self.authorization.as_str())
            .header("Accept", "application/json");
        for &(key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => AppError::Status {
                endpoint: path.to_string(),
                status,
            },
            source => AppError::Http {
                endpoint: path.to_string(),
                source,
            },
        })?;

        response
            .into_body()
            .read_json::<Value>()
            .map_err(|source| AppError::Http {
                endpoint: path.to_string(),
                source,
            })
    }
}
