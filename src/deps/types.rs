//! Repository identifiers and dependency entries

use crate::version::semver::parse_version;
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository identifier, `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

/// Error type for dependency row parsing
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// Identifier is not exactly `owner/name`
    #[error("Invalid repository identifier: {0:?}")]
    InvalidRepoId(String),

    /// Minimum version column does not parse as a semantic version
    #[error("Invalid minimum version: {0:?}")]
    InvalidMinVersion(String),

    /// Row does not have the expected two columns
    #[error("Expected 2 columns, got {0}")]
    WrongColumnCount(usize),
}

impl FromStr for RepoId {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoId {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(RowError::InvalidRepoId(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One dependency entry: a repository and the inclusive version floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub repo: RepoId,
    pub min_version: Version,
}

impl Dependency {
    /// Build a dependency from the two columns of a data row.
    pub fn from_columns(repo: &str, min_version: &str) -> Result<Self, RowError> {
        let repo = repo.trim().parse()?;
        let min_version = parse_version(min_version.trim())
            .ok_or_else(|| RowError::InvalidMinVersion(min_version.to_string()))?;
        Ok(Dependency { repo, min_version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kubernetes/kubernetes", Some(("kubernetes", "kubernetes")))]
    #[case("prometheus/prometheus", Some(("prometheus", "prometheus")))]
    #[case("no-slash", None)]
    #[case("too/many/slashes", None)]
    #[case("/missing-owner", None)]
    #[case("missing-name/", None)]
    #[case("", None)]
    fn test_repo_id_from_str(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        let parsed: Result<RepoId, _> = input.parse();
        match expected {
            Some((owner, name)) => {
                let repo = parsed.unwrap();
                assert_eq!(repo.owner, owner);
                assert_eq!(repo.name, name);
                assert_eq!(repo.to_string(), input);
            }
            None => assert!(matches!(parsed, Err(RowError::InvalidRepoId(_)))),
        }
    }

    #[test]
    fn from_columns_trims_and_parses() {
        let dep = Dependency::from_columns(" prometheus/prometheus ", "2.2.1 ").unwrap();
        assert_eq!(dep.repo.to_string(), "prometheus/prometheus");
        assert_eq!(dep.min_version, Version::new(2, 2, 1));
    }

    #[test]
    fn from_columns_rejects_bad_min_version() {
        let result = Dependency::from_columns("a/b", "not-a-version");
        assert!(matches!(result, Err(RowError::InvalidMinVersion(_))));
    }
}
