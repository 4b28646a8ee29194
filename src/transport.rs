use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Performs one authenticated GET and hands back the body text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, token: &str) -> Result<String>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .map_err(|e| Error::Configuration(format!("cannot build http client: {e}")))?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, token: &str) -> Result<String> {
        let mut token = HeaderValue::from_str(token)
            .map_err(|e| Error::Configuration(format!("auth token is not a valid header: {e}")))?;
        token.set_sensitive(true);

        debug!(%url, "sending request");
        let response = self
            .client
            .get(url)
            .header(AUTH_HEADER, token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%url, status = status.as_u16(), len = body.len(), "received response");

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request failed");
            return Err(Error::Transport {
                status: status.as_u16(),
                body: (!body.is_empty()).then_some(body),
            });
        }

        Ok(body)
    }
}
