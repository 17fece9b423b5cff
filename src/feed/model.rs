//! The in-memory RSS 2.0 model.
//!
//! A deliberately narrow projection of RSS: only the fields the filter and
//! serializer need. Everything is an owned `String`; absent elements are
//! represented as empty strings rather than `Option`s, matching how the
//! serializer re-emits them (empty elements, never omitted).

/// A parsed RSS document: the `<rss>` root and its single channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    /// The `version` attribute of the `<rss>` element, passed through
    /// verbatim and never validated. Empty when the attribute is absent.
    pub version: String,
    pub channel: Channel,
}

/// Channel metadata plus the ordered item list.
///
/// Item order from the source document is preserved through filtering and
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub items: Vec<Item>,
}

/// One syndicated entry.
///
/// All fields tolerate the empty string. `pub_date` is an opaque string —
/// it is never parsed as a date. `guid` carries no uniqueness guarantee;
/// duplicate items pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub guid: String,
}
