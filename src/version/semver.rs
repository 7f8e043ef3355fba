use semver::Version;
use std::cmp::Ordering;

/// Strip a single leading `v` from a release tag.
///
/// GitHub projects commonly publish tags like `v1.2.3`; the numeric part is
/// what gets parsed.
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Does NOT strip 'v' prefix (use `normalize_tag` first if needed).
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a raw release tag, stripping the `v` prefix first.
pub fn parse_tag(tag: &str) -> Option<Version> {
    parse_version(normalize_tag(tag))
}

/// Total order over releases: lexicographic on (major, minor, patch).
///
/// Pre-release and build metadata are ignored, so `1.2.3-rc.1` and `1.2.3`
/// compare equal. This deliberately differs from `Version`'s own `Ord`, which
/// ranks pre-releases below their release.
pub fn release_order(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
}
