//! Minimal element tree built on top of the quick-xml event reader.
//!
//! Only what the RSS extractor needs is kept: element names, their leading
//! character data and their children. The builder rejects documents that are
//! not well-formed instead of returning a partial tree.

use std::collections::HashMap;
use std::sync::OnceLock;

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;

use crate::errors::{AlertsError, AlertsResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Character data that precedes the first child element
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.push_str(text);
        }
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first direct child with the given name.
    /// `Some("")` when the child exists but has no text.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }
}

fn ill_formed(msg: impl Into<String>) -> AlertsError {
    AlertsError::Xml(msg.into())
}

fn element_name(start: &BytesStart<'_>) -> AlertsResult<String> {
    // Reading every attribute surfaces malformed or duplicated ones
    for attr in start.attributes() {
        attr.map_err(|e| ill_formed(e.to_string()))?;
    }

    Ok(String::from_utf8_lossy(start.name().as_ref()).into_owned())
}

/// Internal general entities declared as `<!ENTITY name "value">` in the DOCTYPE.
/// Parameter and external entities are not collected.
fn declared_entities(doctype: &str) -> HashMap<String, String> {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    let entity = ENTITY.get_or_init(|| {
        Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).unwrap()
    });

    entity
        .captures_iter(doctype)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
            Some((name, value))
        })
        .collect()
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Parse a complete XML document and return its root element.
pub fn parse_document(xml: &str) -> AlertsResult<Element> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut entities: HashMap<String, String> = HashMap::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            ill_formed(format!("{} at position {}", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(ill_formed("junk after document element"));
                }
                stack.push(Element::new(element_name(&e)?));
            }
            Event::Empty(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(ill_formed("junk after document element"));
                }
                let element = Element::new(element_name(&e)?);
                attach(element, &mut stack, &mut root);
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = stack
                    .pop()
                    .ok_or_else(|| ill_formed(format!("unexpected end tag </{}>", name)))?;
                if element.name != name {
                    return Err(ill_formed(format!(
                        "mismatched tag: expected </{}>, found </{}>",
                        element.name, name
                    )));
                }
                attach(element, &mut stack, &mut root);
            }
            Event::DocType(e) => {
                entities.extend(declared_entities(&String::from_utf8_lossy(&e)));
            }
            Event::Text(e) => {
                let text = e
                    .unescape_with(|name| match resolve_predefined_entity(name) {
                        Some(value) => Some(value),
                        None => entities.get(name).map(String::as_str),
                    })
                    .map_err(|err| {
                        ill_formed(format!("{} at position {}", err, reader.buffer_position()))
                    })?;
                match stack.last_mut() {
                    Some(current) => current.push_text(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(ill_formed("text outside of the document element")),
                }
            }
            Event::CData(e) => match stack.last_mut() {
                Some(current) => current.push_text(&String::from_utf8_lossy(&e)),
                None => return Err(ill_formed("CDATA outside of the document element")),
            },
            Event::Eof => break,
            // Declarations, comments and processing instructions carry no content
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ill_formed(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| ill_formed("no document element found"))
}
