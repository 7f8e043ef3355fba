// =============================================================================
// Network-related constants
// =============================================================================

/// Default base URL for the GitHub API
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Timeout for a single fetch operation in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Delay between starting each fetch request to avoid rate limiting (10ms)
pub const FETCH_STAGGER_DELAY_MS: u64 = 10;

/// User agent sent with every API request (GitHub rejects anonymous clients)
pub const USER_AGENT: &str = "release-scout";
