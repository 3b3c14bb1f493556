//! Minimal XML document tree and parser for ruleset files.
//!
//! Parsing is delegated to `quick-xml`; its event stream is folded into an
//! owned tree of elements, text, CDATA, and comments. The tree keeps
//! attribute order and subtree content intact so a reordered document can be
//! serialized without touching anything below the root's children.
//! Processing instructions and doctypes are skipped; the XML declaration is
//! captured but the output declaration is fixed by the reorderer anyway.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// An XML node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// An element with name, attributes, and children.
    Element(Element),
    /// Text content (entity-decoded).
    Text(String),
    /// CDATA section content (raw, not entity-decoded).
    CData(String),
    /// Comment content.
    Comment(String),
}

/// An XML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

/// XML declaration pseudo-attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
}

/// An XML document: optional declaration plus exactly one root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub declaration: Option<Declaration>,
    pub root: Element,
}

/// Why an input could not be parsed into a `Document`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error near byte {position}: {source}")]
    Syntax {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
    #[error("malformed attribute near byte {position}: {source}")]
    Attr {
        position: usize,
        #[source]
        source: AttrError,
    },
    #[error("document has no root element")]
    NoRoot,
    #[error("unexpected closing tag near byte {position}")]
    UnexpectedClose { position: usize },
    #[error("element <{name}> is never closed")]
    Unclosed { name: String },
    #[error("content after the root element near byte {position}")]
    TrailingContent { position: usize },
}

impl Element {
    /// Create a new childless element without attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a childless element carrying the given attributes.
    pub fn with_attributes(name: impl Into<String>, attributes: Vec<(String, String)>) -> Self {
        Element {
            name: name.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Element tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute (overwrites if it exists).
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for (k, v) in &mut self.attributes {
            if k == name {
                *v = String::from(value);
                return;
            }
        }
        self.attributes
            .push((String::from(name), String::from(value)));
    }

    /// All attributes as (name, value) pairs, in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child nodes.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Consume the element, yielding its child nodes.
    pub fn into_children(self) -> Vec<XmlNode> {
        self.children
    }

    /// Iterator over child elements only (skips text, comments, CDATA).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// The first text or CDATA child, if any.
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|n| match n {
            XmlNode::Text(s) | XmlNode::CData(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(XmlNode::Element(element));
    }

    /// Append an arbitrary child node.
    pub fn push_child(&mut self, node: XmlNode) {
        self.children.push(node);
    }
}

impl Document {
    /// Parse a UTF-8 XML string into a `Document`.
    pub fn parse(input: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(input);
        let mut declaration: Option<Declaration> = None;
        let mut root: Option<Element> = None;
        let mut stack: Vec<Element> = Vec::new();

        loop {
            let position = reader.buffer_position() as usize;
            let event = reader
                .read_event()
                .map_err(|source| ParseError::Syntax { position, source })?;
            match event {
                Event::Start(e) => stack.push(element_from_start(&e, position)?),
                Event::Empty(e) => {
                    let el = element_from_start(&e, position)?;
                    place(&mut stack, &mut root, el, position)?;
                }
                Event::End(_) => {
                    // quick-xml already rejects mismatched closing names.
                    let el = stack
                        .pop()
                        .ok_or(ParseError::UnexpectedClose { position })?;
                    place(&mut stack, &mut root, el, position)?;
                }
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|source| ParseError::Syntax { position, source })?
                        .into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Text(text));
                    }
                    // Text outside any element (prolog/epilog) is dropped.
                }
                Event::CData(c) => {
                    let data = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::CData(data));
                    }
                }
                Event::Comment(c) => {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Comment(text));
                    }
                }
                Event::Decl(d) => {
                    let version = d
                        .version()
                        .map(|v| String::from_utf8_lossy(&v).into_owned())
                        .unwrap_or_else(|_| String::from("1.0"));
                    let encoding = d
                        .encoding()
                        .and_then(|enc| enc.ok())
                        .map(|v| String::from_utf8_lossy(&v).into_owned());
                    declaration = Some(Declaration { version, encoding });
                }
                // Not round-tripped: PIs other than the declaration, doctypes.
                Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(open) = stack.pop() {
            return Err(ParseError::Unclosed { name: open.name });
        }
        root.map(|root| Document { declaration, root })
            .ok_or(ParseError::NoRoot)
    }
}

fn element_from_start(e: &BytesStart<'_>, position: usize) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|source| ParseError::Attr { position, source })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|source| ParseError::Syntax { position, source })?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Attach a completed element to its parent, or install it as the root.
fn place(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
    position: usize,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::TrailingContent { position });
    }
    *root = Some(element);
    Ok(())
}
