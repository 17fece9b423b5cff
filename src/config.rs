//! Build-time configuration for the filtering proxy.
//!
//! Everything here is a compile-time constant: the proxy has no config file
//! and no runtime-editable state. Changing a denylist means shipping a new
//! build.

use std::time::Duration;

/// Links excluded from every feed. An item is dropped when its `<link>`
/// equals one of these exactly.
pub const DENY_LINKS: &[&str] = &[
    "https://example-news.com/article/123",
    "https://example-news.com/article/456",
];

/// Title keywords excluded from every feed. An item is dropped when its
/// `<title>` contains one of these as a case-sensitive substring.
pub const DENY_TITLE_KEYWORDS: &[&str] = &["PR:", "【広告】", "キャンペーン情報"];

/// Hard deadline for the upstream feed fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifying `User-Agent` sent with every upstream request.
pub const USER_AGENT: &str = "RSS-Filter/1.0";

/// `max-age` for the `Cache-Control` header on successful responses.
pub const CACHE_MAX_AGE_SECS: u32 = 300;

/// Upper bound on the upstream response body size.
pub const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB
