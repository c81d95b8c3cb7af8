//! Parser turning XML text into a generic [`Element`] tree.
//!
//! Shape of the result for
//!
//! ```xml
//! <coverage line-rate="0.5">
//!   <packages>
//!     <package name="a"/>
//!     <package name="b"/>
//!   </packages>
//! </coverage>
//! ```
//!
//! is a document element with a single `coverage` entry, whose `packages`
//! entry holds a `package` sequence of two elements. Attributes live next to
//! child elements. A leaf without attributes collapses to its text.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::document::{Element, Value};
use crate::error::{CovsumError, Result};
use crate::parsers::Parser;

/// Key under which text content is stored when an element also has
/// attributes or children.
pub const TEXT_KEY: &str = "_";

pub struct XmlTreeParser;

impl Parser for XmlTreeParser {
    fn parse(&self, input: &str) -> Result<Element> {
        parse_document(input)
    }
}

/// An element that has been opened but not yet closed.
struct Frame {
    name: String,
    element: Element,
    text: String,
}

impl Frame {
    fn finish(self) -> (String, Value) {
        let Frame {
            name,
            mut element,
            text,
        } = self;
        let value = if element.is_empty() {
            Value::Text(text)
        } else {
            if !text.is_empty() {
                element.insert(TEXT_KEY, Value::Text(text));
            }
            Value::Element(element)
        };
        (name, value)
    }
}

/// Parse a whole document. The returned element has exactly one entry, named
/// after the root tag.
pub fn parse_document(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);

    let mut document = Element::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(CovsumError::Xml {
                    source,
                    position: reader.buffer_position(),
                })
            }
        };
        let position = reader.buffer_position();

        match event {
            Event::Start(ref e) => stack.push(open_frame(e, position)?),
            Event::Empty(ref e) => {
                let frame = open_frame(e, position)?;
                attach(&mut stack, &mut document, frame)?;
            }
            Event::Text(ref e) => {
                // Text outside the root element carries no data.
                if let Some(frame) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|source| CovsumError::Xml { source, position })?;
                    frame.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    CovsumError::Parse(format!("unexpected closing tag at position {position}"))
                })?;
                attach(&mut stack, &mut document, frame)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, DOCTYPE
            _ => {}
        }
    }

    if let Some(frame) = stack.last() {
        return Err(CovsumError::Parse(format!(
            "unclosed element <{}>",
            frame.name
        )));
    }
    if document.is_empty() {
        return Err(CovsumError::Parse("document has no root element".to_string()));
    }
    Ok(document)
}

fn open_frame(e: &BytesStart, position: usize) -> Result<Frame> {
    let name = decode_name(e.name().as_ref());
    let mut element = Element::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CovsumError::Xml {
            source: err.into(),
            position,
        })?;
        let key = decode_name(attr.key.as_ref());
        let value = attr
            .unescape_value()
            .map_err(|source| CovsumError::Xml { source, position })?;
        element.insert(key, Value::Text(value.into_owned()));
    }
    Ok(Frame {
        name,
        element,
        text: String::new(),
    })
}

/// Hang a closed element under its parent, or make it the document root.
fn attach(stack: &mut [Frame], document: &mut Element, frame: Frame) -> Result<()> {
    let (name, value) = frame.finish();
    match stack.last_mut() {
        Some(parent) => parent.element.insert(name, value),
        None if document.is_empty() => document.insert(name, value),
        None => {
            return Err(CovsumError::Parse(format!(
                "second root element <{name}>"
            )))
        }
    }
    Ok(())
}

fn decode_name(raw: &[u8]) -> String {
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(name) => name.to_string(),
        Cow::Owned(name) => name,
    }
}
