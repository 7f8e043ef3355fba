//! GitHub Releases API registry implementation

use crate::config::{DEFAULT_GITHUB_BASE_URL, FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::deps::types::RepoId;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Registry implementation for GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_BASE_URL)
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_release_tags(&self, repo: &RepoId) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/repos/{}/{}/releases", self.base_url, repo.owner, repo.name);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repo.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}
