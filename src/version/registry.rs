//! Registry trait for fetching release tags from remote sources

#[cfg(test)]
use mockall::automock;

use crate::deps::types::RepoId;
use crate::version::error::RegistryError;

/// Trait for fetching published release tags for a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all published release tags for a repository
    ///
    /// # Arguments
    /// * `repo` - The repository identifier (e.g., "kubernetes/kubernetes")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tag strings as published by the remote source
    ///   (prefixes like `v` are not stripped here)
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_release_tags(&self, repo: &RepoId) -> Result<Vec<String>, RegistryError>;
}
