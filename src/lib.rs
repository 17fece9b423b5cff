//! Content-filtering proxy for RSS 2.0 feeds.
//!
//! The crate fetches a remote feed, drops items matching a build-time
//! denylist (exact link match or title keyword match), and re-serializes the
//! surviving items as indented RSS XML suitable for an HTTP response body.
//!
//! The request pipeline is strictly linear:
//!
//! ```text
//! validate → fetch → parse → filter → serialize
//! ```
//!
//! Each stage lives in its own module and fails with its own error type;
//! [`pipeline`] chains them and maps the first failure to an HTTP-style
//! status and message. [`server`] adapts the pipeline to an axum router, but
//! the pipeline itself is host-agnostic: it needs only a [`reqwest::Client`]
//! and a set of [`filter::FilterRules`].
//!
//! No state persists between requests — there is no cache, no storage, and
//! the filter rules are compile-time constants (see [`config`]).

pub mod config;
pub mod feed;
pub mod filter;
pub mod pipeline;
pub mod server;
pub mod util;

pub use feed::{Channel, Feed, Item};
pub use filter::FilterRules;
pub use pipeline::{handle_request, FeedResponse, PipelineError};
pub use server::{create_router, AppState};
