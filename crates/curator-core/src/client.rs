use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::error::GatewayError;
use crate::gateway::PostGateway;
use crate::post::{Post, PostPage, PAGE_SIZE};

/// HTTP gateway to the remote admin API.
#[derive(Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
}

/// Response envelope shared by the read endpoints: `data` is absent when a
/// lookup matches nothing.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<PagePayload>,
}

#[derive(Debug, Deserialize)]
struct PagePayload {
    #[serde(default)]
    content: Vec<Post>,
    #[serde(default)]
    last: bool,
}

impl AdminClient {
    /// The timeout bounds every request; a hung backend must not wedge the
    /// caller's loading state forever.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or("unknown")
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::Transport("base URL cannot carry paths".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_envelope(&self, url: Url) -> Result<Envelope, GatewayError> {
        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        response.json::<Envelope>().await.map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

impl PostGateway for AdminClient {
    async fn list_posts(&self, page: u32) -> Result<PostPage, GatewayError> {
        let mut url = self.endpoint(&["posts"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("size", &PAGE_SIZE.to_string());

        let envelope = self.fetch_envelope(url).await?;
        let payload = envelope.data.ok_or_else(|| GatewayError::Decode("page envelope without data".into()))?;
        debug!(page, count = payload.content.len(), last = payload.last, "fetched post page");
        Ok(PostPage { items: payload.content, last: payload.last })
    }

    async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, GatewayError> {
        let id = user_id.to_string();
        let url = self.endpoint(&["posts", "user", &id])?;
        let envelope = self.fetch_envelope(url).await?;
        Ok(envelope.data.map(|p| p.content).unwrap_or_default())
    }

    async fn delete_post(&self, id: i64) -> Result<(), GatewayError> {
        let id = id.to_string();
        let url = self.endpoint(&["posts", &id])?;
        let response = self.http.delete(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        Ok(())
    }
}
