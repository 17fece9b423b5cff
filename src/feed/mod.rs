//! Feed handling: the RSS data model and its wire conversions.
//!
//! This module covers three of the pipeline stages:
//!
//! - **Fetching**: one bounded HTTP retrieval of the raw feed bytes
//! - **Parsing**: RSS 2.0 XML into the structured [`Feed`] model
//! - **Serializing**: the model back into indented RSS XML
//!
//! # Architecture
//!
//! The submodules are deliberately symmetric around [`Feed`]:
//!
//! - [`fetcher`] - HTTP retrieval with a fixed timeout and size cap
//! - [`parser`] - quick-xml pull parsing, tolerant of unknown elements
//! - [`serializer`] - stable, indented re-encoding with XML declaration
//!
//! Parsing and serializing are inverse on the modeled subset: feeding a
//! serialized [`Feed`] back through the parser yields an equal value.

mod fetcher;
mod model;
mod parser;
mod serializer;

pub use fetcher::{fetch, FetchError};
pub use model::{Channel, Feed, Item};
pub use parser::{parse, ParseError};
pub use serializer::{serialize, SerializeError};
