use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use thiserror::Error;

use crate::feed::model::Feed;

/// Errors that can occur while encoding a feed.
///
/// Both variants are defensive: encoding an in-memory [`Feed`] into a
/// `Vec<u8>` has no expected failure mode.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The XML writer reported a failure.
    #[error("XML write error: {0}")]
    Xml(String),
    /// The encoded document is not valid UTF-8.
    #[error("serialized document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes a [`Feed`] as an indented RSS 2.0 document.
///
/// The output starts with `<?xml version="1.0" encoding="UTF-8"?>`, uses
/// two-space indentation per nesting level, and emits every modeled field —
/// empty strings become empty elements, never omissions. The `version`
/// attribute is written exactly as carried by the feed. Output bytes are
/// stable for a given feed, so tests can compare strings directly.
pub fn serialize(feed: &Feed) -> Result<String, SerializeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", feed.version.as_str()));
    writer.write_event(Event::Start(rss)).map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("channel")))
        .map_err(xml_err)?;
    write_text_element(&mut writer, "title", &feed.channel.title)?;
    write_text_element(&mut writer, "link", &feed.channel.link)?;
    write_text_element(&mut writer, "description", &feed.channel.description)?;
    write_text_element(&mut writer, "language", &feed.channel.language)?;

    for item in &feed.channel.items {
        writer
            .write_event(Event::Start(BytesStart::new("item")))
            .map_err(xml_err)?;
        write_text_element(&mut writer, "title", &item.title)?;
        write_text_element(&mut writer, "link", &item.link)?;
        write_text_element(&mut writer, "description", &item.description)?;
        write_text_element(&mut writer, "pubDate", &item.pub_date)?;
        write_text_element(&mut writer, "guid", &item.guid)?;
        writer
            .write_event(Event::End(BytesEnd::new("item")))
            .map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("rss")))
        .map_err(xml_err)?;

    String::from_utf8(writer.into_inner()).map_err(SerializeError::Utf8)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), SerializeError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)?;
    Ok(())
}

fn xml_err(e: impl std::fmt::Display) -> SerializeError {
    SerializeError::Xml(e.to_string())
}
