use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::feed::model::{Channel, Feed, Item};

/// Errors that can occur while decoding feed XML.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid UTF-8.
    #[error("feed body is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Malformed XML (unclosed or mismatched tags, bad attributes, etc.)
    #[error("XML parse error: {0}")]
    Xml(String),

    /// The document's root element is not `<rss>`.
    #[error("expected <rss> root element, found <{0}>")]
    UnexpectedRoot(String),

    /// The document contains no element at all.
    #[error("document has no root element")]
    MissingRoot,
}

/// Parses RSS 2.0 bytes into a [`Feed`].
///
/// Only the modeled subset is extracted: the `version` attribute of the
/// root, four channel fields, and five fields per `<item>`. Unknown
/// elements — including whole subtrees such as `<image>` — are skipped
/// without affecting the modeled fields, and missing elements yield empty
/// strings rather than errors. CDATA sections contribute their literal
/// content.
///
/// # Errors
///
/// Returns [`ParseError`] when the bytes are not UTF-8, the XML is
/// malformed, or the root element is not `<rss>`.
pub fn parse(bytes: &[u8]) -> Result<Feed, ParseError> {
    let content = std::str::from_utf8(bytes)?;
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                return if e.name().as_ref() == b"rss" {
                    let version = version_attribute(&e, &reader)?;
                    let channel = parse_rss(&mut reader)?;
                    Ok(Feed { version, channel })
                } else {
                    Err(ParseError::UnexpectedRoot(element_name(&e)))
                };
            }
            // A childless <rss/> is still a feed, with an empty channel
            Ok(Event::Empty(e)) => {
                return if e.name().as_ref() == b"rss" {
                    Ok(Feed {
                        version: version_attribute(&e, &reader)?,
                        channel: Channel::default(),
                    })
                } else {
                    Err(ParseError::UnexpectedRoot(element_name(&e)))
                };
            }
            Ok(Event::Eof) => return Err(ParseError::MissingRoot),
            Err(e) => return Err(ParseError::Xml(e.to_string())),
            // Declaration, doctype, comments, processing instructions
            Ok(_) => {}
        }
    }
}

/// Children of `<rss>`: locate `<channel>`, skip anything else.
fn parse_rss(reader: &mut Reader<&[u8]>) -> Result<Channel, ParseError> {
    let mut channel = Channel::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"channel" {
                    channel = parse_channel(reader)?;
                } else {
                    skip_subtree(reader, &e)?;
                }
            }
            Ok(Event::Empty(_)) => {}
            // Unknown subtrees are consumed whole, so this is </rss>
            Ok(Event::End(_)) => return Ok(channel),
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(ParseError::Xml(e.to_string())),
            Ok(_) => {}
        }
    }
}

fn parse_channel(reader: &mut Reader<&[u8]>) -> Result<Channel, ParseError> {
    let mut channel = Channel::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"title" => channel.title = read_element_text(reader, b"title")?,
                b"link" => channel.link = read_element_text(reader, b"link")?,
                b"description" => {
                    channel.description = read_element_text(reader, b"description")?
                }
                b"language" => channel.language = read_element_text(reader, b"language")?,
                b"item" => channel.items.push(parse_item(reader)?),
                _ => skip_subtree(reader, &e)?,
            },
            // Self-closing elements like <title/> keep the empty default
            Ok(Event::Empty(_)) => {}
            Ok(Event::End(_)) => return Ok(channel),
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(ParseError::Xml(e.to_string())),
            Ok(_) => {}
        }
    }
}

fn parse_item(reader: &mut Reader<&[u8]>) -> Result<Item, ParseError> {
    let mut item = Item::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"title" => item.title = read_element_text(reader, b"title")?,
                b"link" => item.link = read_element_text(reader, b"link")?,
                b"description" => item.description = read_element_text(reader, b"description")?,
                b"pubDate" => item.pub_date = read_element_text(reader, b"pubDate")?,
                b"guid" => item.guid = read_element_text(reader, b"guid")?,
                _ => skip_subtree(reader, &e)?,
            },
            Ok(Event::Empty(_)) => {}
            Ok(Event::End(_)) => return Ok(item),
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(ParseError::Xml(e.to_string())),
            Ok(_) => {}
        }
    }
}

/// Collects the text content of the current element up to `</end>`.
///
/// Text and CDATA fragments are concatenated; nested markup inside a text
/// field is dropped.
fn read_element_text(reader: &mut Reader<&[u8]>, end: &[u8]) -> Result<String, ParseError> {
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let fragment = t.unescape().map_err(|e| ParseError::Xml(e.to_string()))?;
                text.push_str(&fragment);
            }
            Ok(Event::CData(c)) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Ok(Event::Start(e)) => skip_subtree(reader, &e)?,
            Ok(Event::Empty(_)) => {}
            Ok(Event::End(e)) if e.name().as_ref() == end => return Ok(text),
            Ok(Event::End(_)) => return Err(ParseError::Xml("mismatched end tag".to_string())),
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(ParseError::Xml(e.to_string())),
            Ok(_) => {}
        }
    }
}

/// Consumes an unknown element and everything inside it.
fn skip_subtree(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<(), ParseError> {
    reader
        .read_to_end(start.name())
        .map(|_| ())
        .map_err(|e| ParseError::Xml(e.to_string()))
}

fn version_attribute(
    e: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<String, ParseError> {
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| ParseError::Xml(e.to_string()))?;
        if attr.key.as_ref() == b"version" {
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(|e| ParseError::Xml(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    // Absent attribute passes through as the empty string
    Ok(String::new())
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn unexpected_eof() -> ParseError {
    ParseError::Xml("unexpected end of document".to_string())
}
