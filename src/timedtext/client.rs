//! Timedtext HTTP client for fetching caption documents.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::{RelayError, Result};
use crate::timedtext::list::{parse_list, TranscriptList};
use crate::timedtext::transcript::{parse_transcript, Transcript};
use crate::timedtext::endpoint::{list_url, transcript_url};

/// Timedtext HTTP client.
#[derive(Clone)]
pub struct TimedTextClient {
    inner: Arc<TimedTextClientInner>,
}

struct TimedTextClientInner {
    base_url: String,
    http_client: Client,
}

/// Replace every newline in a raw upstream body with a single space.
pub fn normalize_newlines(body: &[u8]) -> Bytes {
    body.iter()
        .map(|&b| if b == b'\n' { b' ' } else { b })
        .collect::<Vec<u8>>()
        .into()
}

impl TimedTextClient {
    /// Create a new client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            inner: Arc::new(TimedTextClientInner {
                base_url: config.base_url.clone(),
                http_client,
            }),
        })
    }

    /// Base URL of the timedtext endpoint.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// GET `url` and return the body with newlines normalized to spaces.
    ///
    /// Anything other than `200 OK` is an error; the body is not read then.
    pub async fn fetch_raw(&self, url: Url) -> Result<Bytes> {
        tracing::debug!("Fetching {}", url);

        let res = self.inner.http_client.get(url).send().await?;
        if res.status() != StatusCode::OK {
            tracing::debug!("Upstream answered {}", res.status());
            return Err(RelayError::UpstreamStatus(res.status().to_string()));
        }

        let body = res.bytes().await?;
        Ok(normalize_newlines(&body))
    }

    /// Fetch the transcript of `video_id` in `lang`, machine translated to
    /// `tlang` when that is non-empty.
    pub async fn get_transcript(
        &self,
        lang: &str,
        video_id: &str,
        tlang: &str,
    ) -> Result<Transcript> {
        let url = transcript_url(self.base_url(), lang, video_id, tlang)?;
        let body = self.fetch_raw(url).await?;
        parse_transcript(&String::from_utf8_lossy(&body))
    }

    /// Fetch the caption languages available for `video_id`.
    pub async fn get_list(&self, video_id: &str) -> Result<TranscriptList> {
        let url = list_url(self.base_url(), video_id)?;
        let body = self.fetch_raw(url).await?;
        parse_list(&String::from_utf8_lossy(&body))
    }
}
