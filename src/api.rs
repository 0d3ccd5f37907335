use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::fetcher::Fetcher;
use crate::model::{Comment, NewPost, Post, PostPatch, User};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Typed client for the demo posts/users REST resource.
///
/// The base address is fixed at construction; every method issues exactly one
/// request. Writes are accepted by the remote but never persisted there, so a
/// later read will not observe them.
#[derive(Clone)]
pub struct ApiClient {
    fetcher: Fetcher,
    base_url: Url,
}

impl ApiClient {
    pub fn new(fetcher: Fetcher, base_url: Url) -> Self {
        Self {
            fetcher,
            base_url: with_trailing_slash(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_posts(&self) -> FetchResult<Vec<Post>> {
        self.get_json("posts").await
    }

    pub async fn fetch_post(&self, id: u64) -> FetchResult<Post> {
        self.get_json(&format!("posts/{id}")).await
    }

    pub async fn fetch_post_comments(&self, post_id: u64) -> FetchResult<Vec<Comment>> {
        self.get_json(&format!("posts/{post_id}/comments")).await
    }

    pub async fn fetch_users(&self) -> FetchResult<Vec<User>> {
        self.get_json("users").await
    }

    pub async fn fetch_user(&self, id: u64) -> FetchResult<User> {
        self.get_json(&format!("users/{id}")).await
    }

    pub async fn create_post(&self, post: &NewPost) -> FetchResult<Post> {
        self.send_json(Method::POST, "posts", post).await
    }

    pub async fn update_post(&self, id: u64, patch: &PostPatch) -> FetchResult<Post> {
        self.send_json(Method::PUT, &format!("posts/{id}"), patch)
            .await
    }

    pub async fn delete_post(&self, id: u64) -> FetchResult<()> {
        let url = self.url(&format!("posts/{id}"))?;
        self.fetcher.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.url(path)?;
        let bytes = self.fetcher.send(Method::GET, url.clone(), None).await?;
        decode(&url, &bytes)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> FetchResult<T> {
        let url = self.url(path)?;
        let payload = serde_json::to_vec(body).map_err(|source| FetchError::Encode {
            url: url.clone(),
            source,
        })?;
        let bytes = self.fetcher.send(method, url.clone(), Some(payload)).await?;
        decode(&url, &bytes)
    }

    fn url(&self, path: &str) -> FetchResult<Url> {
        self.base_url.join(path).map_err(|source| FetchError::Path {
            path: path.to_string(),
            source,
        })
    }
}

fn decode<T: DeserializeOwned>(url: &Url, bytes: &[u8]) -> FetchResult<T> {
    serde_json::from_slice(bytes).map_err(|source| FetchError::Decode {
        url: url.clone(),
        source,
    })
}

// `Url::join` replaces the last segment unless the base ends in a slash, which
// would drop a path prefix like `/api`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let fetcher = Fetcher::new("test-agent", 1, None).unwrap();
        ApiClient::new(fetcher, Url::parse(base).unwrap())
    }

    #[test]
    fn joins_paths_under_base_prefix() {
        let c = client("https://example.com/api");
        assert_eq!(
            c.url("posts/3/comments").unwrap().as_str(),
            "https://example.com/api/posts/3/comments"
        );
    }

    #[test]
    fn joins_paths_under_bare_host() {
        let c = client("https://jsonplaceholder.typicode.com");
        assert_eq!(
            c.url("users/5").unwrap().as_str(),
            "https://jsonplaceholder.typicode.com/users/5"
        );
    }
}
