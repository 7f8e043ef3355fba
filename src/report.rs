//! Per-dependency fetch orchestration and output formatting
//!
//! Fetches are executed in parallel with staggered start times to avoid rate
//! limiting. `join_all` yields results in input order, so output lines stay
//! aligned with the dependency file regardless of completion order. A failed
//! fetch is reported and does not stop processing of other dependencies.

use crate::config::FETCH_STAGGER_DELAY_MS;
use crate::deps::types::{Dependency, RepoId};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::select::latest_per_minor;
use crate::version::semver::parse_tag;
use futures::future::join_all;
use semver::Version;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Outcome of one dependency lookup, in input order
#[derive(Debug)]
pub struct DependencyReport {
    pub repo: RepoId,
    pub outcome: Result<Vec<Version>, RegistryError>,
}

/// Fetch release tags for every dependency and select the latest version of
/// each minor line at or above its floor.
pub async fn check_dependencies(
    registry: &dyn Registry,
    dependencies: Vec<Dependency>,
) -> Vec<DependencyReport> {
    let futures = dependencies.into_iter().enumerate().map(|(i, dependency)| {
        let delay = Duration::from_millis(FETCH_STAGGER_DELAY_MS * i as u64);
        async move {
            sleep(delay).await;
            let outcome = latest_versions(registry, &dependency).await;
            DependencyReport {
                repo: dependency.repo,
                outcome,
            }
        }
    });

    join_all(futures).await
}

async fn latest_versions(
    registry: &dyn Registry,
    dependency: &Dependency,
) -> Result<Vec<Version>, RegistryError> {
    let tags = registry.fetch_release_tags(&dependency.repo).await?;

    let candidates = tags
        .iter()
        .filter_map(|tag| {
            let parsed = parse_tag(tag);
            if parsed.is_none() {
                warn!("Skipping unparsable tag {:?} of {}", tag, dependency.repo);
            }
            parsed
        })
        .collect();

    Ok(latest_per_minor(candidates, &dependency.min_version))
}

/// Format the output line for a successful lookup.
///
/// The format is a compatibility contract with existing consumers:
/// `latest versions of <owner/repo>: [<versions, newest first, space-separated>]`
pub fn format_report_line(repo: &RepoId, versions: &[Version]) -> String {
    let list = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("latest versions of {}: [{}]", repo, list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::MockRegistry;

    fn dependency(repo: &str, min_version: &str) -> Dependency {
        Dependency::from_columns(repo, min_version).unwrap()
    }

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn selects_latest_patch_per_minor_line_from_raw_tags() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_release_tags()
            .returning(|_| Ok(tags(&["v2.0.1", "v2.1.0", "v2.0.5", "v1.9.0"])));

        let reports =
            check_dependencies(&registry, vec![dependency("a/b", "2.0.0")]).await;

        assert_eq!(reports.len(), 1);
        let versions = reports[0].outcome.as_ref().unwrap();
        assert_eq!(
            versions,
            &[Version::new(2, 1, 0), Version::new(2, 0, 5)]
        );
    }

    #[tokio::test]
    async fn unparsable_tags_are_skipped() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_release_tags()
            .returning(|_| Ok(tags(&["v1.2.0", "latest", "v1.3.0-not a version!"])));

        let reports =
            check_dependencies(&registry, vec![dependency("a/b", "1.0.0")]).await;

        let versions = reports[0].outcome.as_ref().unwrap();
        assert_eq!(versions, &[Version::new(1, 2, 0)]);
    }

    #[tokio::test]
    async fn reports_keep_input_order_and_errors_do_not_stop_processing() {
        let mut registry = MockRegistry::new();
        registry.expect_fetch_release_tags().returning(|repo| {
            if repo.owner == "missing" {
                Err(RegistryError::NotFound(repo.to_string()))
            } else {
                Ok(tags(&["v1.0.0"]))
            }
        });

        let reports = check_dependencies(
            &registry,
            vec![
                dependency("first/repo", "1.0.0"),
                dependency("missing/repo", "1.0.0"),
                dependency("last/repo", "1.0.0"),
            ],
        )
        .await;

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].repo.to_string(), "first/repo");
        assert!(reports[0].outcome.is_ok());
        assert_eq!(reports[1].repo.to_string(), "missing/repo");
        assert!(matches!(
            reports[1].outcome,
            Err(RegistryError::NotFound(_))
        ));
        assert_eq!(reports[2].repo.to_string(), "last/repo");
        assert!(reports[2].outcome.is_ok());
    }

    #[test]
    fn format_report_line_is_space_separated_in_brackets() {
        let repo: RepoId = "kubernetes/kubernetes".parse().unwrap();
        let versions = vec![Version::new(1, 10, 1), Version::new(1, 9, 6)];
        assert_eq!(
            format_report_line(&repo, &versions),
            "latest versions of kubernetes/kubernetes: [1.10.1 1.9.6]"
        );
    }

    #[test]
    fn format_report_line_with_no_versions() {
        let repo: RepoId = "a/b".parse().unwrap();
        assert_eq!(format_report_line(&repo, &[]), "latest versions of a/b: []");
    }
}
