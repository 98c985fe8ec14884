//! A small owned element tree built from quick-xml events.

use quick_xml::events::{BytesRef, BytesStart, BytesText, Event};
use quick_xml::Reader;

use crate::xml::XmlError;

/// An XML element with its attributes, text and child elements.
///
/// Text is the concatenation of the element's own character data (text,
/// CDATA and entity references), trimmed of surrounding whitespace.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::xml;
///
/// let root = xml::parse(b"<products><product id=\"1\"><name>Scarf</name></product></products>").unwrap();
/// let products = root.elements_by_tag_name("product");
///
/// assert_eq!(products.len(), 1);
/// assert_eq!(products[0].attribute("id"), Some("1"));
/// assert_eq!(products[0].child_text("name"), Some("Scarf"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Creates an element with the given tag name and no content.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element's own text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the direct child elements.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first direct child with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns every direct child with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the text of the first direct child with the given tag name.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Self::text)
    }

    /// Returns all descendant elements with the given tag name, in document order.
    ///
    /// The element itself is not included.
    #[must_use]
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Self>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let qname = start.name();
        let name = std::str::from_utf8(qname.as_ref())
            .map_err(|e| XmlError::ParseError(e.to_string()))?
            .to_string();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())
                .map_err(|e| XmlError::ParseError(e.to_string()))?
                .to_string();
            let raw = std::str::from_utf8(&attribute.value)
                .map_err(|e| XmlError::ParseError(e.to_string()))?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|e| XmlError::ParseError(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn finish(mut self) -> Self {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
        self
    }
}

/// Parses an XML document and returns its root element.
///
/// The XML declaration, comments, processing instructions and doctype are
/// skipped.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is malformed, has no root element or
/// has more than one.
pub fn parse(xml: &[u8]) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_reader(xml);
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => open.push(XmlElement::from_start(&e)?),
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                let element = open.pop().ok_or_else(|| {
                    XmlError::UnexpectedElement("closing tag without opening tag".to_string())
                })?;
                attach(&mut open, &mut root, element.finish())?;
            }
            Event::Text(e) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&decode_text(&e)?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = open.last_mut() {
                    let data = std::str::from_utf8(&e)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    current.text.push_str(data);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&resolve_reference(&e)?);
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(XmlError::UnexpectedElement(format!(
            "unexpected EOF inside <{}>",
            unclosed.name
        )));
    }

    root.ok_or_else(|| XmlError::MissingElement("root element".to_string()))
}

fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(XmlError::UnexpectedElement(format!(
            "second root element <{}>",
            element.name
        )));
    }
    Ok(())
}

fn decode_text(text: &BytesText<'_>) -> Result<String, XmlError> {
    let decoded = text
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    let unescaped = quick_xml::escape::unescape(&decoded)
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    Ok(unescaped.into_owned())
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, XmlError> {
    let name = reference
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;

    if let Some(number) = name.strip_prefix('#') {
        let code = if let Some(hex) = number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            u32::from_str_radix(hex, 16)
        } else {
            number.parse::<u32>()
        }
        .map_err(|err| XmlError::ParseError(format!("invalid character reference '&{name};': {err}")))?;

        return char::from_u32(code).map(String::from).ok_or_else(|| {
            XmlError::ParseError(format!("invalid character reference '&{name};'"))
        });
    }

    quick_xml::escape::resolve_predefined_entity(&name)
        .map(String::from)
        .ok_or_else(|| XmlError::ParseError(format!("unknown entity '&{name};'")))
}
