use crate::domain::{Method, OutgoingRequest, RawResponse, Transport, TransportError};
use crate::frameworks::config::ClientSettings;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

// Thin reqwest wrapper that speaks to the lobby server over HTTP.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl HttpTransport {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        Self::new(settings.base_url.clone(), settings.timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Appends each segment to the base url path, percent-encoding it on its own
    // so `/`, `?` and `#` inside a lobby code never change the route.
    fn url_for(&self, segments: &[String]) -> Result<Url, TransportError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "" | "." | ".."))
        {
            return Err(TransportError {
                message: format!("path segment {segment:?} cannot be sent"),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError {
                message: format!("base url {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        let url = self.url_for(&request.segments)?;
        let builder = match request.method {
            Method::Post => self.http.post(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        // Keep the raw text; classification decides how to read it.
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
