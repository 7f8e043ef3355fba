//! Latest-patch-per-minor-line selection
//!
//! Given an unordered set of release versions and an inclusive floor, keep the
//! highest version of every distinct (major, minor) line at or above the
//! floor, newest first.

use crate::version::semver::release_order;
use semver::Version;
use std::cmp::Ordering;

/// Select the highest version of each (major, minor) line at or above `floor`.
///
/// The result is strictly descending under the release order, contains at most
/// one entry per minor line, and its first element is the global maximum at or
/// above the floor. Duplicates collapse to a single entry. Returns an empty
/// vector when no candidate qualifies.
///
/// Callers must only pass well-formed versions; unparsable tags are filtered
/// out before this point.
pub fn latest_per_minor(mut candidates: Vec<Version>, floor: &Version) -> Vec<Version> {
    candidates.sort_by(|a, b| release_order(b, a));

    let mut selected = Vec::new();
    let mut last_line: Option<(u64, u64)> = None;
    for version in candidates {
        if release_order(&version, floor) == Ordering::Less {
            // Sorted descending, so everything after this is below the floor too.
            break;
        }
        if last_line == Some((version.major, version.minor)) {
            continue;
        }
        last_line = Some((version.major, version.minor));
        selected.push(version);
    }
    selected
}
