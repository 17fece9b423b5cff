//! Utility functions for common operations.
//!
//! Currently holds the URL validation layer used to guard the feed fetcher
//! against SSRF (Server-Side Request Forgery) targets.

mod url_validator;

pub use url_validator::{validate_url, UrlValidationError};
