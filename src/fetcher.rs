use std::sync::Arc;

use anyhow::Context as _;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use tokio::sync::Semaphore;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::progress::Progress;

/// Shared HTTP transport: one reqwest client, a concurrency cap and optional
/// progress reporting. Requests are single-shot.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    semaphore: Arc<Semaphore>,
    progress: Option<Arc<Progress>>,
}

impl Fetcher {
    pub fn new(
        user_agent: &str,
        max_concurrency: usize,
        progress: Option<Arc<Progress>>,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(max_concurrency.max(1))),
            progress,
        })
    }

    /// Sends one request and returns the body of a 2xx answer.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> FetchResult<Bytes> {
        // The semaphore is never closed, so acquire only fails if it is dropped.
        let _permit = self.semaphore.acquire().await.ok();

        if let Some(p) = &self.progress {
            p.http_start(&method, &url);
        }
        let res = self.send_inner(&method, &url, body).await;
        if let Some(p) = &self.progress {
            match &res {
                Ok(bytes) => p.http_ok(&method, &url, bytes.len()),
                Err(_) => p.http_err(&method, &url),
            }
        }
        res
    }

    async fn send_inner(
        &self,
        method: &Method,
        url: &Url,
        body: Option<Vec<u8>>,
    ) -> FetchResult<Bytes> {
        let mut req = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            req = req.body(body);
        }

        let transport = |source| FetchError::Transport {
            method: method.clone(),
            url: url.clone(),
            source,
        };

        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();

        if status.is_success() {
            return resp.bytes().await.map_err(transport);
        }

        tracing::warn!(%method, %url, %status, "request failed");
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                method: method.clone(),
                url: url.clone(),
            });
        }
        Err(FetchError::Status {
            method: method.clone(),
            url: url.clone(),
            status,
        })
    }
}
